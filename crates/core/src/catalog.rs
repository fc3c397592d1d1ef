//! Tetromino catalog - base shapes and colors
//!
//! Every shape is four block offsets around a pivot at the origin, in the
//! spawn orientation. Y points up, and all pieces start flat in the XY plane.

use glam::IVec3;

use crate::types::{PieceKind, Rgb};

/// Four block offsets relative to the pivot
pub type BaseShape = [IVec3; 4];

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetrominoDef {
    pub kind: PieceKind,
    pub shape: BaseShape,
    pub color: Rgb,
}

const I_SHAPE: BaseShape = [
    IVec3::new(0, 2, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, 0, 0),
    IVec3::new(0, -1, 0),
];

const O_SHAPE: BaseShape = [
    IVec3::new(0, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(1, 1, 0),
];

const T_SHAPE: BaseShape = [
    IVec3::new(0, 0, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(0, 1, 0),
];

const S_SHAPE: BaseShape = [
    IVec3::new(0, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(-1, 1, 0),
];

const Z_SHAPE: BaseShape = [
    IVec3::new(0, 0, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(1, 1, 0),
];

// J and L hang their hook off the bottom of a vertical bar.
const J_SHAPE: BaseShape = [
    IVec3::new(0, 1, 0),
    IVec3::new(0, 0, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(-1, -1, 0),
];

const L_SHAPE: BaseShape = [
    IVec3::new(0, 1, 0),
    IVec3::new(0, 0, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(1, -1, 0),
];

/// Base shape for a piece kind (spawn orientation)
pub fn base_shape(kind: PieceKind) -> BaseShape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Display color for a piece kind
pub fn color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::from_hex(0x00FFFF),
        PieceKind::O => Rgb::from_hex(0xFFFF00),
        PieceKind::T => Rgb::from_hex(0x800080),
        PieceKind::S => Rgb::from_hex(0x00FF00),
        PieceKind::Z => Rgb::from_hex(0xFF0000),
        PieceKind::J => Rgb::from_hex(0x0000FF),
        PieceKind::L => Rgb::from_hex(0xFFA500),
    }
}

/// Full catalog entry for a piece kind
pub fn lookup(kind: PieceKind) -> TetrominoDef {
    TetrominoDef {
        kind,
        shape: base_shape(kind),
        color: color(kind),
    }
}

/// Catalog entry by name, `None` if the name is not one of the seven kinds
pub fn lookup_name(name: &str) -> Option<TetrominoDef> {
    PieceKind::from_str(name).map(lookup)
}
