//! 3-D block stacking (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches can write `tetris3d::{core, engine, ...}`.

pub use tetris3d_core as core;
pub use tetris3d_engine as engine;
pub use tetris3d_input as input;
pub use tetris3d_term as term;
pub use tetris3d_types as types;
