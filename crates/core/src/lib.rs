//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains every game rule of the 3-D block-stacking game. It has
//! **no dependencies** on terminal I/O or timing, making it:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: the front-end only reads snapshots and sends commands
//!
//! # Module Structure
//!
//! - [`catalog`]: base shapes and colors of the seven tetrominoes
//! - [`grid`]: the voxel playfield, occupancy and layer clearing
//! - [`piece`]: a falling tetromino and its quarter-turn rotations in 3-D
//! - [`collision`]: validity oracle and ghost (drop) projection
//! - [`scoring`]: points per clear and fall interval per level
//! - [`game_state`]: the session state machine and its commands
//! - [`snapshot`]: read-only published state for renderers
//! - [`config`]: grid size, seed and spawn configuration
//! - [`rng`]: seeded piece generation
//!
//! # Game Rules
//!
//! - A piece spawns centered near the top and falls one layer per tick
//! - Translation along X and Z, and ±90° turns about X, Y or Z, are refused
//!   when any block would leave the grid or overlap a settled block
//! - A blocked fall settles the piece; full horizontal layers are removed and
//!   everything above them drops
//! - Each settle scores `[0, 100, 300, 500, 800][layers] × level`
//! - The game ends when the next piece cannot be placed
//!
//! # Example
//!
//! ```
//! use tetris3d_core::{collision::DOWN, GameState};
//! use tetris3d_core::types::{Axis, GameAction, GameStatus, RotationDirection};
//!
//! let mut game = GameState::new(12345);
//! game.start_game();
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.rotate_piece(Axis::Y, RotationDirection::Positive);
//!
//! // Fall until the piece lands; a new piece takes its place.
//! while game.move_piece(DOWN) {}
//! assert_eq!(game.grid().occupied_count(), 4);
//! assert!(game.current().is_some());
//! ```

pub mod catalog;
pub mod collision;
pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetris3d_types as types;

// Re-export commonly used types for convenience
pub use collision::{drop_distance, ghost_position, is_valid_position};
pub use config::GameConfig;
pub use error::{CoreError, PieceError};
pub use game_state::GameState;
pub use grid::{Grid, GridDimensions};
pub use piece::Piece;
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{calculate_score, drop_interval_ms, level_for_lines};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
