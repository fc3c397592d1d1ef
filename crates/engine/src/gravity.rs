//! Gravity timer - the periodic fall tick
//!
//! A fixed-timestep accumulator that issues one downward move per fall
//! interval while the game is playing. The schedule is tied to the state it
//! was armed for: any change of status, level or game restarts it from zero,
//! and leaving `Playing` stops it.
//!
//! Every fire re-checks the status at the moment it fires, since an earlier
//! fire in the same update may have ended the game.

use log::trace;

use crate::core::{collision::DOWN, drop_interval_ms, GameState};
use crate::types::GameStatus;

/// What the running schedule was armed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Arming {
    level: u32,
    game: u32,
}

impl Arming {
    fn of(game: &GameState) -> Self {
        Self {
            level: game.level(),
            game: game.games_started(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GravityTimer {
    armed: Option<Arming>,
    interval_ms: u32,
    elapsed_ms: u32,
}

impl GravityTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.armed.is_some()
    }

    /// Current fall interval, `None` while stopped
    pub fn interval_ms(&self) -> Option<u32> {
        self.armed.map(|_| self.interval_ms)
    }

    /// Time accumulated towards the next fire
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn stop(&mut self) {
        self.armed = None;
        self.elapsed_ms = 0;
    }

    /// Bring the schedule in line with the game: stop outside `Playing`,
    /// restart when the level or game changed
    pub fn sync(&mut self, game: &GameState) {
        if game.status() != GameStatus::Playing {
            if self.armed.is_some() {
                trace!("gravity stopped ({})", game.status().as_str());
            }
            self.stop();
            return;
        }

        let arming = Arming::of(game);
        if self.armed != Some(arming) {
            self.armed = Some(arming);
            self.interval_ms = drop_interval_ms(arming.level);
            self.elapsed_ms = 0;
            trace!(
                "gravity armed at level {} ({} ms)",
                arming.level,
                self.interval_ms
            );
        }
    }

    /// Advance by `elapsed_ms` and fire the due ticks. Returns how many fired
    pub fn update(&mut self, game: &mut GameState, elapsed_ms: u32) -> u32 {
        self.sync(game);
        if !self.is_running() {
            return 0;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let mut fired = 0;
        while self.is_running() && self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            if game.status() != GameStatus::Playing {
                self.stop();
                break;
            }
            game.move_piece(DOWN);
            fired += 1;
            self.sync(game);
        }
        fired
    }
}
