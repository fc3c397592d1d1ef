//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders a
//! [`core::GameSnapshot`] into a framebuffer of styled characters and flushes
//! that framebuffer to the terminal, rewriting only the rows that changed.
//!
//! The voxel grid is drawn as a front and a side projection next to a panel
//! with score, level, lines, status and the next piece.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris3d_core as core;
pub use tetris3d_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Projection, Rect, Viewport};
pub use renderer::{changed_rows, encode_full_into, encode_rows_into, TerminalRenderer};
