//! Read-only view of a game session for renderers.
//!
//! A snapshot is a plain copy: holding one never lets the holder mutate the
//! session. `GameState::snapshot_into` refills an existing snapshot so a
//! render loop can reuse its cell buffer every frame.

use glam::IVec3;
use serde::Serialize;

use crate::catalog;
use crate::grid::GridDimensions;
use crate::piece::Piece;
use crate::types::{Cell, GameStatus, PieceKind, Rgb, INITIAL_LEVEL};

/// The falling piece, in world cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: Rgb,
    pub cells: [IVec3; 4],
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            color: piece.color(),
            cells: piece.grid_cells(),
        }
    }
}

/// The upcoming piece, as its base shape for preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub color: Rgb,
    pub shape: [IVec3; 4],
}

impl From<&Piece> for NextSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            color: piece.color(),
            shape: piece.base_shape(),
        }
    }
}

impl Default for NextSnapshot {
    fn default() -> Self {
        let def = catalog::lookup(PieceKind::I);
        Self {
            kind: def.kind,
            color: def.color,
            shape: def.shape,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub dimensions: GridDimensions,
    /// Layer-major cells: `(y * depth + z) * width + x`
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub ghost: Option<[IVec3; 4]>,
    pub next: NextSnapshot,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Cell at a coordinate, `None` both for empty and out of bounds
    pub fn cell(&self, x: i32, y: i32, z: i32) -> Cell {
        let d = self.dimensions;
        if x < 0
            || y < 0
            || z < 0
            || x as u32 >= d.width()
            || y as u32 >= d.height()
            || z as u32 >= d.depth()
        {
            return None;
        }
        let idx = (y as usize * d.depth() as usize + z as usize) * d.width() as usize + x as usize;
        self.cells.get(idx).copied().flatten()
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let dimensions = GridDimensions::default();
        Self {
            dimensions,
            cells: vec![None; dimensions.volume()],
            active: None,
            ghost: None,
            next: NextSnapshot::default(),
            score: 0,
            level: INITIAL_LEVEL,
            lines: 0,
            status: GameStatus::StartScreen,
        }
    }
}
