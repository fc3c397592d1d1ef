//! Session configuration
//!
//! Read from environment variables:
//!
//! - `TETRIS3D_WIDTH`, `TETRIS3D_HEIGHT`, `TETRIS3D_DEPTH`: grid size (default 10 × 20 × 10)
//! - `TETRIS3D_SEED`: piece RNG seed (default 1)
//!
//! Values that fail to parse, a zero dimension, or a dimension above
//! [`MAX_DIMENSION`] fall back to the defaults with a warning.

use glam::IVec3;
use log::warn;

use crate::grid::GridDimensions;
use crate::types::{GRID_DEPTH, GRID_HEIGHT, GRID_WIDTH};

/// Largest accepted grid size along any axis
pub const MAX_DIMENSION: u32 = 256;

/// Configuration for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub dimensions: GridDimensions,
    pub seed: u32,
    /// Pivot for newly spawned pieces; `None` uses the grid's default spawn
    pub spawn: Option<IVec3>,
}

impl GameConfig {
    pub fn new(dimensions: GridDimensions, seed: u32) -> Self {
        Self {
            dimensions,
            seed,
            spawn: None,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_spawn(mut self, spawn: IVec3) -> Self {
        self.spawn = Some(spawn);
        self
    }

    /// Spawn pivot in effect for this configuration
    pub fn spawn_position(&self) -> IVec3 {
        self.spawn
            .unwrap_or_else(|| self.dimensions.spawn_position())
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: u32| -> u32 {
            let Some(raw) = lookup(key) else {
                return default;
            };
            match raw.trim().parse::<u32>() {
                Ok(v) => v,
                Err(_) => {
                    warn!("ignoring {}={:?}: not a number, using {}", key, raw, default);
                    default
                }
            }
        };

        let width = read("TETRIS3D_WIDTH", GRID_WIDTH);
        let height = read("TETRIS3D_HEIGHT", GRID_HEIGHT);
        let depth = read("TETRIS3D_DEPTH", GRID_DEPTH);
        let seed = read("TETRIS3D_SEED", 1);

        let dimensions = if [width, height, depth].iter().any(|&d| d > MAX_DIMENSION) {
            warn!(
                "grid {}x{}x{} exceeds {} per axis; using default grid",
                width, height, depth, MAX_DIMENSION
            );
            GridDimensions::default()
        } else {
            GridDimensions::new(width, height, depth).unwrap_or_else(|err| {
                warn!("{}; using default grid", err);
                GridDimensions::default()
            })
        };

        Self::new(dimensions, seed)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(GridDimensions::default(), 1)
    }
}
