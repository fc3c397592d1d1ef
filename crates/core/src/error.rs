//! Error types for the game core.
//!
//! Collisions are never errors: they are boolean outcomes of
//! [`crate::collision::is_valid_position`]. The variants here are contract
//! violations by the caller.

use thiserror::Error;

/// Errors raised while constructing a piece
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PieceError {
    #[error("invalid piece type: {0:?}")]
    InvalidPieceType(String),
}

/// Errors raised while building the grid or the session configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid grid dimensions {width}x{height}x{depth} (each must be at least 1)")]
    InvalidDimensions { width: u32, height: u32, depth: u32 },

    #[error(transparent)]
    Piece(#[from] PieceError),
}
