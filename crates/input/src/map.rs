//! Key mapping from terminal events to game actions.
//!
//! The same key means different things per status: Enter pauses a running
//! game, resumes a paused one and starts a new one from the title or
//! game-over screen. Letter keys are case-sensitive where the shifted letter
//! is the opposite turn (`r`/`R`, `f`/`F`).

use crate::types::{Axis, GameAction, GameStatus, RotationDirection};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use RotationDirection::{Negative, Positive};

/// Map keyboard input to a game action for the given status.
pub fn map_key(key: KeyEvent, status: GameStatus) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match status {
        GameStatus::Playing => playing_action(key.code),
        GameStatus::Paused => match key.code {
            KeyCode::Enter => Some(GameAction::Resume),
            _ => None,
        },
        GameStatus::StartScreen | GameStatus::GameOver => match key.code {
            KeyCode::Enter => Some(GameAction::Start),
            _ => None,
        },
    }
}

fn playing_action(code: KeyCode) -> Option<GameAction> {
    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::MoveForward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::MoveBackward),
        KeyCode::Char(' ') => Some(GameAction::MoveDown),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::HardDrop),

        // Rotation
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameAction::Rotate(Axis::Y, Positive)),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(GameAction::Rotate(Axis::Y, Negative)),
        KeyCode::Char('r') => Some(GameAction::Rotate(Axis::X, Positive)),
        KeyCode::Char('R') => Some(GameAction::Rotate(Axis::X, Negative)),
        KeyCode::Char('f') => Some(GameAction::Rotate(Axis::Z, Positive)),
        KeyCode::Char('F') => Some(GameAction::Rotate(Axis::Z, Negative)),

        KeyCode::Enter => Some(GameAction::Pause),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && (key.code == KeyCode::Esc
            || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
                && key.modifiers.contains(KeyModifiers::CONTROL)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn playing(code: KeyCode) -> Option<GameAction> {
        map_key(press(code), GameStatus::Playing)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(playing(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(playing(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(playing(KeyCode::Up), Some(GameAction::MoveForward));
        assert_eq!(playing(KeyCode::Down), Some(GameAction::MoveBackward));

        assert_eq!(playing(KeyCode::Char('a')), Some(GameAction::MoveLeft));
        assert_eq!(playing(KeyCode::Char('D')), Some(GameAction::MoveRight));
        assert_eq!(playing(KeyCode::Char('w')), Some(GameAction::MoveForward));
        assert_eq!(playing(KeyCode::Char('s')), Some(GameAction::MoveBackward));
    }

    #[test]
    fn test_drop_keys() {
        assert_eq!(playing(KeyCode::Char(' ')), Some(GameAction::MoveDown));
        assert_eq!(playing(KeyCode::Char('x')), Some(GameAction::HardDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            playing(KeyCode::Char('q')),
            Some(GameAction::Rotate(Axis::Y, Positive))
        );
        assert_eq!(
            playing(KeyCode::Char('e')),
            Some(GameAction::Rotate(Axis::Y, Negative))
        );
        assert_eq!(
            playing(KeyCode::Char('r')),
            Some(GameAction::Rotate(Axis::X, Positive))
        );
        assert_eq!(
            playing(KeyCode::Char('R')),
            Some(GameAction::Rotate(Axis::X, Negative))
        );
        assert_eq!(
            playing(KeyCode::Char('f')),
            Some(GameAction::Rotate(Axis::Z, Positive))
        );
        assert_eq!(
            playing(KeyCode::Char('F')),
            Some(GameAction::Rotate(Axis::Z, Negative))
        );
    }

    #[test]
    fn test_enter_depends_on_status() {
        let enter = press(KeyCode::Enter);
        assert_eq!(map_key(enter, GameStatus::Playing), Some(GameAction::Pause));
        assert_eq!(map_key(enter, GameStatus::Paused), Some(GameAction::Resume));
        assert_eq!(
            map_key(enter, GameStatus::StartScreen),
            Some(GameAction::Start)
        );
        assert_eq!(map_key(enter, GameStatus::GameOver), Some(GameAction::Start));
    }

    #[test]
    fn test_gameplay_keys_ignored_when_not_playing() {
        for status in [GameStatus::Paused, GameStatus::StartScreen, GameStatus::GameOver] {
            assert_eq!(map_key(press(KeyCode::Left), status), None);
            assert_eq!(map_key(press(KeyCode::Char('q')), status), None);
        }
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release, GameStatus::Playing), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(press(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(press(KeyCode::Char('q'))));
        assert!(!should_quit(press(KeyCode::Char('c'))));
    }
}
