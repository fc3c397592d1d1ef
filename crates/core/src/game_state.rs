//! Game state module - the game session and its state machine
//!
//! This module ties together the grid, pieces, the collision oracle and
//! scoring. It owns every piece of mutable game state; collaborators read it
//! through accessors or snapshots and change it only through commands.
//!
//! ```text
//! StartScreen --start_game--> Playing --pause_game--> Paused --resume_game--> Playing
//! Playing --(spawn blocked)--> GameOver --start_game--> Playing
//! ```
//!
//! Any command issued outside these edges is a no-op.

use glam::Vec3;
use log::{debug, info};

use crate::collision::{ghost_position, is_valid_position};
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::calculate_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::types::*;

/// A single play session
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    /// Present iff the status is Playing or Paused
    current: Option<Piece>,
    /// Pre-generated, never placed yet
    next: Piece,
    generator: PieceGenerator,
    score: u32,
    level: u32,
    lines: u32,
    status: GameStatus,
    /// Last settle outcome (consumed by observers).
    last_event: Option<SettleEvent>,
    /// Number of games started in this session
    games_started: u32,
}

impl GameState {
    /// Create a session on the default grid with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default().with_seed(seed))
    }

    pub fn with_config(config: GameConfig) -> Self {
        let mut generator = PieceGenerator::new(config.seed);
        let next = Self::generate_piece(&mut generator, &config);

        Self {
            config,
            grid: Grid::new(config.dimensions),
            current: None,
            next,
            generator,
            score: 0,
            level: INITIAL_LEVEL,
            lines: 0,
            status: GameStatus::StartScreen,
            last_event: None,
            games_started: 0,
        }
    }

    fn generate_piece(generator: &mut PieceGenerator, config: &GameConfig) -> Piece {
        Piece::new(generator.next_kind(), config.spawn_position().as_vec3())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Where the current piece would land, without changing anything
    pub fn ghost(&self) -> Option<Piece> {
        ghost_position(&self.grid, self.current.as_ref())
    }

    /// Take and clear the last settle event.
    pub fn take_last_event(&mut self) -> Option<SettleEvent> {
        self.last_event.take()
    }

    /// Set the level used for scoring and fall speed (minimum 1)
    pub fn set_level(&mut self, level: u32) {
        self.level = level.max(INITIAL_LEVEL);
    }

    /// Start (or restart after game over) a fresh game.
    ///
    /// Resets grid and counters, promotes the pending next piece and draws a
    /// new one. Returns false when the current status does not allow starting.
    pub fn start_game(&mut self) -> bool {
        if !matches!(self.status, GameStatus::StartScreen | GameStatus::GameOver) {
            return false;
        }

        self.grid.reset();
        let first = self.next;
        self.next = Self::generate_piece(&mut self.generator, &self.config);
        self.current = Some(first);
        self.score = 0;
        self.level = INITIAL_LEVEL;
        self.lines = 0;
        self.last_event = None;
        self.status = GameStatus::Playing;
        self.games_started = self.games_started.wrapping_add(1);
        info!(
            "game {} started with {} piece",
            self.games_started,
            first.kind().as_str()
        );

        // Only an unusual spawn override can be blocked on an empty grid.
        if !is_valid_position(&self.grid, &first) {
            info!("start position is blocked");
            self.end_game();
        }
        true
    }

    pub fn pause_game(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.status = GameStatus::Paused;
        debug!("paused");
        true
    }

    pub fn resume_game(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Playing;
        debug!("resumed");
        true
    }

    pub fn end_game(&mut self) {
        self.status = GameStatus::GameOver;
        self.current = None;
        info!(
            "game over: score {}, lines {}, level {}",
            self.score, self.lines, self.level
        );
    }

    /// Try to move the current piece by `offset`.
    ///
    /// A blocked downward move is the landing signal: the piece settles and
    /// this still returns false. Blocked sideways moves change nothing.
    pub fn move_piece(&mut self, offset: Vec3) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };

        let moved = current.translated(offset);
        if is_valid_position(&self.grid, &moved) {
            self.current = Some(moved);
            return true;
        }

        if offset.y < 0.0 {
            self.settle_piece();
        }
        false
    }

    /// Try to turn the current piece a quarter-turn about `axis`.
    ///
    /// A colliding rotation is simply refused; no alternate positions are tried.
    pub fn rotate_piece(&mut self, axis: Axis, direction: RotationDirection) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };

        let turned = current.rotated(axis, direction);
        if is_valid_position(&self.grid, &turned) {
            self.current = Some(turned);
            return true;
        }

        debug!("rotation about {} blocked", axis.as_str());
        false
    }

    /// Drop the current piece onto its ghost position and settle it
    pub fn hard_drop(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(ghost) = self.ghost() else {
            return false;
        };
        self.current = Some(ghost);
        self.settle_piece();
        true
    }

    /// Write the current piece into the grid, clear completed layers, score
    /// them and spawn the next piece. Does nothing unless playing.
    pub fn settle_piece(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        let Some(piece) = self.current.take() else {
            return;
        };

        self.grid.add_piece(&piece);
        let cleared = self.grid.check_and_clear_completed_layers();
        let points = calculate_score(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared);
        self.last_event = Some(SettleEvent {
            lines_cleared: cleared,
            points,
        });

        if cleared > 0 {
            debug!(
                "{} settled, cleared {} layer(s) for {} points",
                piece.kind().as_str(),
                cleared,
                points
            );
        }

        self.spawn_new_piece();
    }

    /// Promote the next piece to current.
    ///
    /// The candidate is checked before anything is committed; if its spawn
    /// cells are blocked the game ends and no current piece remains. Refused
    /// unless playing.
    pub fn spawn_new_piece(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let candidate = self.next;
        let upcoming = Self::generate_piece(&mut self.generator, &self.config);

        if !is_valid_position(&self.grid, &candidate) {
            info!("spawn of {} piece blocked", candidate.kind().as_str());
            self.end_game();
            return false;
        }

        self.current = Some(candidate);
        self.next = upcoming;
        debug!(
            "spawned {}, next {}",
            candidate.kind().as_str(),
            upcoming.kind().as_str()
        );
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start_game(),
            GameAction::Pause => self.pause_game(),
            GameAction::Resume => self.resume_game(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate(axis, direction) => self.rotate_piece(axis, direction),
            GameAction::MoveLeft
            | GameAction::MoveRight
            | GameAction::MoveForward
            | GameAction::MoveBackward
            | GameAction::MoveDown => match action.offset() {
                Some(step) => self.move_piece(Vec3::from_array(step.map(|v| v as f32))),
                None => false,
            },
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.dimensions = self.grid.dimensions();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.active = self.current.as_ref().map(ActiveSnapshot::from);
        out.ghost = self.ghost().map(|ghost| ghost.grid_cells());
        out.next = NextSnapshot::from(&self.next);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn force_next(&mut self, kind: PieceKind) {
        self.next = Piece::new(kind, self.config.spawn_position().as_vec3());
    }

    #[cfg(test)]
    pub(crate) fn force_current(&mut self, piece: Piece) {
        self.current = Some(piece);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::DOWN;
    use glam::IVec3;

    const GRAY: Rgb = Rgb::new(128, 128, 128);

    fn playing(seed: u32) -> GameState {
        let mut state = GameState::new(seed);
        assert!(state.start_game());
        state
    }

    fn fill_layer(grid: &mut Grid, y: i32) {
        for x in 0..grid.width() as i32 {
            for z in 0..grid.depth() as i32 {
                grid.set(x, y, z, Some(GRAY));
            }
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert_eq!(state.status(), GameStatus::StartScreen);
        assert!(state.current().is_none());
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.next().position(), Vec3::new(4.0, 17.0, 4.0));
    }

    #[test]
    fn test_start_promotes_next_piece() {
        let mut state = GameState::new(12345);
        let pending = *state.next();
        assert!(state.start_game());
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.current(), Some(&pending));
        assert_eq!(state.games_started(), 1);
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut state = playing(3);
        let current = state.current().copied();
        assert!(!state.start_game());
        assert_eq!(state.current().copied(), current);
    }

    #[test]
    fn test_pause_resume_transitions() {
        let mut state = GameState::new(1);
        assert!(!state.pause_game());
        assert!(!state.resume_game());

        state.start_game();
        assert!(!state.resume_game());
        assert!(state.pause_game());
        assert_eq!(state.status(), GameStatus::Paused);
        assert!(!state.pause_game());
        assert!(state.current().is_some());

        assert!(state.resume_game());
        assert_eq!(state.status(), GameStatus::Playing);
    }

    #[test]
    fn test_commands_ignored_while_paused() {
        let mut state = playing(5);
        state.pause_game();
        let before = state.current().copied();
        assert!(!state.move_piece(Vec3::X));
        assert!(!state.rotate_piece(Axis::Y, RotationDirection::Positive));
        assert!(!state.hard_drop());
        assert_eq!(state.current().copied(), before);
    }

    #[test]
    fn test_scenario_a_o_piece_falls_and_settles() {
        let mut state = GameState::new(8);
        state.force_next(PieceKind::O);
        state.start_game();
        let upcoming = *state.next();

        let mut steps = 0;
        while state.move_piece(DOWN) {
            steps += 1;
        }
        assert_eq!(steps, 17);

        // The O settled flat on the floor.
        for (x, z) in [(4, 4), (5, 4)] {
            assert!(state.grid().is_occupied(x, 0, z));
            assert!(state.grid().is_occupied(x, 1, z));
        }
        assert_eq!(state.grid().occupied_count(), 4);

        // The former next piece is now current, at the spawn position.
        assert_eq!(state.current(), Some(&upcoming));
        assert_eq!(state.status(), GameStatus::Playing);
    }

    #[test]
    fn test_scenario_b_single_layer_clear_scores() {
        let mut state = playing(2);
        state.set_level(3);

        // Layer 0 full except (0, 0, 0); a marker block sits on layer 1.
        fill_layer(state.grid_mut(), 0);
        state.grid_mut().set(0, 0, 0, None);
        let marker = Rgb::new(1, 2, 3);
        state.grid_mut().set(7, 1, 7, Some(marker));

        // A vertical I piece whose lowest block fills the gap.
        state.force_current(Piece::new(PieceKind::I, Vec3::new(0.0, 1.0, 0.0)));
        state.settle_piece();

        assert_eq!(state.lines(), 1);
        assert_eq!(state.score(), 100 * 3);
        assert_eq!(
            state.take_last_event(),
            Some(SettleEvent {
                lines_cleared: 1,
                points: 300
            })
        );
        // Layer 0 now holds what was in layer 1.
        assert_eq!(state.grid().get(7, 0, 7), Some(Some(marker)));
        assert!(!state.grid().is_layer_complete(0));
        // Remaining I blocks moved down with their layers.
        assert!(state.grid().is_occupied(0, 0, 0));
        assert!(state.grid().is_occupied(0, 2, 0));
        assert!(!state.grid().is_occupied(0, 3, 0));
    }

    #[test]
    fn test_scenario_d_blocked_rotation_leaves_piece_unchanged() {
        let mut state = playing(4);
        let piece = Piece::new(PieceKind::I, Vec3::new(4.0, 10.0, 4.0));
        state.force_current(piece);

        // A +X quarter-turn would swing the top block to z = 6.
        let target = piece.rotated(Axis::X, RotationDirection::Positive);
        let blocked = target.grid_cells()[0];
        assert_eq!(blocked, IVec3::new(4, 10, 6));
        state.grid_mut().set(blocked.x, blocked.y, blocked.z, Some(GRAY));

        assert!(!state.rotate_piece(Axis::X, RotationDirection::Positive));
        assert_eq!(state.current(), Some(&piece));

        // The other direction is free.
        assert!(state.rotate_piece(Axis::X, RotationDirection::Negative));
        assert_ne!(state.current(), Some(&piece));
    }

    #[test]
    fn test_scenario_e_blocked_spawn_ends_game() {
        let mut state = playing(6);
        let spawn = state.config().spawn_position();
        state.grid_mut().set(spawn.x, spawn.y, spawn.z, Some(GRAY));
        let pending = *state.next();

        assert!(!state.spawn_new_piece());
        assert_eq!(state.status(), GameStatus::GameOver);
        assert!(state.current().is_none());
        // The blocked candidate is discarded, the pending next stays as it was.
        assert_eq!(state.next(), &pending);
    }

    #[test]
    fn test_spawn_refused_outside_play() {
        let mut state = GameState::new(14);
        let pending = *state.next();
        assert!(!state.spawn_new_piece());
        assert_eq!(state.status(), GameStatus::StartScreen);
        assert!(state.current().is_none());
        assert_eq!(state.next(), &pending);

        state.start_game();
        state.end_game();
        assert!(!state.spawn_new_piece());
        assert_eq!(state.status(), GameStatus::GameOver);
        assert!(state.current().is_none());
        assert!(state.snapshot().active.is_none());
    }

    #[test]
    fn test_settle_ignored_while_paused() {
        let mut state = playing(15);
        state.pause_game();
        let before = state.current().copied();

        state.settle_piece();
        assert_eq!(state.status(), GameStatus::Paused);
        assert!(state.grid().is_empty());
        assert_eq!(state.current().copied(), before);
        assert!(state.take_last_event().is_none());

        // Blocked spawn cells do not end a paused game either.
        let spawn = state.config().spawn_position();
        state.grid_mut().set(spawn.x, spawn.y, spawn.z, Some(GRAY));
        assert!(!state.spawn_new_piece());
        assert_eq!(state.status(), GameStatus::Paused);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = playing(6);
        state.grid_mut().set(0, 0, 0, Some(GRAY));
        state.end_game();
        assert!(state.start_game());
        assert_eq!(state.status(), GameStatus::Playing);
        assert!(state.grid().is_empty());
        assert_eq!(state.games_started(), 2);
    }

    #[test]
    fn test_failed_sideways_move_does_not_settle() {
        let mut state = playing(9);
        let piece = Piece::new(PieceKind::O, Vec3::new(8.0, 5.0, 4.0));
        state.force_current(piece);

        // O spans x = 8..=9, so +X hits the wall.
        assert!(!state.move_piece(Vec3::X));
        assert_eq!(state.current(), Some(&piece));
        assert!(state.grid().is_empty());
    }

    #[test]
    fn test_hard_drop_settles_at_ghost() {
        let mut state = playing(10);
        state.force_current(Piece::new(PieceKind::T, Vec3::new(4.0, 12.0, 4.0)));
        let ghost = state.ghost().unwrap();

        assert!(state.hard_drop());
        for cell in ghost.grid_cells() {
            assert!(state.grid().is_occupied(cell.x, cell.y, cell.z));
        }
        assert_eq!(
            state.take_last_event(),
            Some(SettleEvent {
                lines_cleared: 0,
                points: 0
            })
        );
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_level_is_not_raised_automatically() {
        let mut state = playing(11);
        for y in 0..4 {
            fill_layer(state.grid_mut(), y);
        }
        state.grid_mut().set(0, 0, 0, None);
        state.force_current(Piece::new(PieceKind::O, Vec3::new(0.0, 4.0, 0.0)));
        state.settle_piece();
        assert_eq!(state.lines(), 3);
        assert_eq!(state.level(), 1);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = playing(12);
        let snap = state.snapshot();
        assert_eq!(snap.status, GameStatus::Playing);
        assert_eq!(snap.active.unwrap().cells, state.current().unwrap().grid_cells());
        assert_eq!(snap.next.kind, state.next().kind());
        assert_eq!(snap.ghost, state.ghost().map(|g| g.grid_cells()));

        state.end_game();
        let mut reused = snap;
        state.snapshot_into(&mut reused);
        assert!(reused.active.is_none());
        assert!(reused.ghost.is_none());
        assert_eq!(reused.status, GameStatus::GameOver);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut state = GameState::new(13);
        assert!(state.apply_action(GameAction::Start));
        state.force_current(Piece::new(PieceKind::O, Vec3::new(4.0, 10.0, 4.0)));

        assert!(state.apply_action(GameAction::MoveLeft));
        assert!(state.apply_action(GameAction::MoveBackward));
        assert!(state.apply_action(GameAction::MoveDown));
        assert_eq!(state.current().unwrap().position(), Vec3::new(3.0, 9.0, 5.0));

        assert!(state.apply_action(GameAction::Pause));
        assert!(!state.apply_action(GameAction::MoveRight));
        assert!(state.apply_action(GameAction::Resume));
    }
}
