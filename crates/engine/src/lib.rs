//! Session driver: owns the game state and its gravity schedule.
//!
//! The front-end feeds two things into an [`Engine`]: player actions as they
//! arrive and the wall-clock time elapsed since the previous frame. Both are
//! applied on the caller's thread, so commands and fall ticks never
//! interleave.

pub mod gravity;

pub use tetris3d_core as core;
pub use tetris3d_types as types;

pub use gravity::GravityTimer;

use log::debug;

use crate::core::{GameConfig, GameSnapshot, GameState};
use crate::types::{GameAction, SettleEvent};

#[derive(Debug, Clone)]
pub struct Engine {
    game: GameState,
    gravity: GravityTimer,
}

impl Engine {
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default().with_seed(seed))
    }

    pub fn with_config(config: GameConfig) -> Self {
        debug!(
            "engine created: {}x{}x{} seed {}",
            config.dimensions.width(),
            config.dimensions.height(),
            config.dimensions.depth(),
            config.seed
        );
        Self {
            game: GameState::with_config(config),
            gravity: GravityTimer::new(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn gravity(&self) -> &GravityTimer {
        &self.gravity
    }

    /// Apply one player action and resynchronise gravity with the result
    pub fn apply(&mut self, action: GameAction) -> bool {
        let applied = self.game.apply_action(action);
        self.gravity.sync(&self.game);
        applied
    }

    /// Advance the clock. Returns the number of fall ticks that fired
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        self.gravity.update(&mut self.game, elapsed_ms)
    }

    /// Change the level; gravity picks up the new interval immediately
    pub fn set_level(&mut self, level: u32) {
        self.game.set_level(level);
        self.gravity.sync(&self.game);
    }

    pub fn take_last_event(&mut self) -> Option<SettleEvent> {
        self.game.take_last_event()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}
