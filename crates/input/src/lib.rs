//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] according to
//! the current [`crate::types::GameStatus`]. The mapping is stateless; the
//! caller passes the status it read from the engine before the key arrived.

pub mod map;

pub use tetris3d_types as types;

pub use map::{map_key, should_quit};
