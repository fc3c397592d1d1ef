//! Piece module - one falling tetromino and its rigid 3-D rotations
//!
//! Orientation is stored as a unit quaternion accumulated from ±90° turns about
//! the principal axes. Each turn is pre-multiplied, so it is applied in world
//! space rather than in the piece's local frame.
//!
//! `blocks` is always recomputed from the immutable base shape and the full
//! accumulated orientation, then rounded to the nearest integer. Rotated
//! coordinates are never rotated again, so floating-point error cannot build up.

use glam::{IVec3, Quat, Vec3};

use crate::catalog::{self, BaseShape};
use crate::error::PieceError;
use crate::types::{Axis, PieceKind, RotationDirection, Rgb};

/// A falling tetromino
///
/// The piece knows nothing about the grid; validity is decided by
/// [`crate::collision`]. Copies are fully independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    kind: PieceKind,
    color: Rgb,
    /// World position of the pivot
    position: Vec3,
    orientation: Quat,
    /// Base shape under `orientation`, rounded
    blocks: [IVec3; 4],
}

impl Piece {
    /// Create a piece in spawn orientation with its pivot at `position`
    pub fn new(kind: PieceKind, position: Vec3) -> Self {
        let def = catalog::lookup(kind);
        Self {
            kind,
            color: def.color,
            position,
            orientation: Quat::IDENTITY,
            blocks: def.shape,
        }
    }

    /// Create a piece from a catalog name such as `"T"`
    pub fn from_name(name: &str, position: Vec3) -> Result<Self, PieceError> {
        PieceKind::from_str(name)
            .map(|kind| Self::new(kind, position))
            .ok_or_else(|| PieceError::InvalidPieceType(name.to_string()))
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Block offsets relative to the pivot in the current orientation
    pub fn blocks(&self) -> &[IVec3; 4] {
        &self.blocks
    }

    /// Block offsets in spawn orientation
    pub fn base_shape(&self) -> BaseShape {
        catalog::base_shape(self.kind)
    }

    /// Compose a quarter-turn about `axis` onto the orientation
    pub fn rotate(&mut self, axis: Axis, direction: RotationDirection) {
        let turn = Quat::from_axis_angle(Vec3::from_array(axis.unit()), direction.angle());
        self.orientation = (turn * self.orientation).normalize();

        let orientation = self.orientation;
        self.blocks = self
            .base_shape()
            .map(|base| (orientation * base.as_vec3()).round().as_ivec3());
    }

    /// Add `offset` to the pivot. No grid validation happens here
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Copy of this piece moved by `offset`
    pub fn translated(&self, offset: Vec3) -> Self {
        let mut moved = *self;
        moved.translate(offset);
        moved
    }

    /// Copy of this piece turned about `axis`
    pub fn rotated(&self, axis: Axis, direction: RotationDirection) -> Self {
        let mut turned = *self;
        turned.rotate(axis, direction);
        turned
    }

    /// World coordinates of each block (`blocks[i] + position`)
    pub fn world_blocks(&self) -> [Vec3; 4] {
        self.blocks.map(|offset| offset.as_vec3() + self.position)
    }

    /// World coordinates rounded onto the grid. Halves round up, so a pivot
    /// at -0.5 lands on 0.
    pub fn grid_cells(&self) -> [IVec3; 4] {
        self.world_blocks()
            .map(|v| (v + Vec3::splat(0.5)).floor().as_ivec3())
    }

    /// Lowest layer touched by the piece
    pub fn bottom(&self) -> i32 {
        self.grid_cells().iter().map(|c| c.y).min().unwrap_or(0)
    }
}
