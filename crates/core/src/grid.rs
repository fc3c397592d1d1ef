//! Grid module - manages the 3-D voxel playfield
//!
//! The grid is a `width × height × depth` box where each cell is either empty
//! or holds the color of a settled block.
//! Uses a flat vector for cache locality: a horizontal layer (fixed `y`) is one
//! contiguous run of `width * depth` cells, so clearing a layer is a single
//! `copy_within` of everything above it.
//!
//! Coordinates outside the box are never stored. For collision purposes they
//! behave as solid wall.

use glam::IVec3;
use log::warn;
use serde::Serialize;

use crate::error::CoreError;
use crate::piece::Piece;
use crate::types::{Cell, Rgb, GRID_DEPTH, GRID_HEIGHT, GRID_WIDTH};

/// Validated grid dimensions (every axis at least 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridDimensions {
    width: u32,
    height: u32,
    depth: u32,
}

impl GridDimensions {
    pub fn new(width: u32, height: u32, depth: u32) -> Result<Self, CoreError> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(CoreError::InvalidDimensions {
                width,
                height,
                depth,
            });
        }
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Cells in one horizontal layer
    pub fn layer_len(&self) -> usize {
        self.width as usize * self.depth as usize
    }

    /// Total number of cells
    pub fn volume(&self) -> usize {
        self.layer_len() * self.height as usize
    }

    /// Default spawn pivot: centered horizontally, three layers below the top
    pub fn spawn_position(&self) -> IVec3 {
        IVec3::new(
            (self.width / 2) as i32 - 1,
            self.height as i32 - 3,
            (self.depth / 2) as i32 - 1,
        )
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            depth: GRID_DEPTH,
        }
    }
}

/// The voxel grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: GridDimensions,
    /// Flat cells, layer-major: `(y * depth + z) * width + x`
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            dims,
            cells: vec![None; dims.volume()],
        }
    }

    /// Calculate flat index from (x, y, z) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.is_in_bounds(x, y, z) {
            return None;
        }
        let (w, d) = (self.dims.width as usize, self.dims.depth as usize);
        Some((y as usize * d + z as usize) * w + x as usize)
    }

    #[inline(always)]
    fn layer_range(&self, y: usize) -> std::ops::Range<usize> {
        let len = self.dims.layer_len();
        y * len..(y + 1) * len
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    pub fn width(&self) -> u32 {
        self.dims.width
    }

    pub fn height(&self) -> u32 {
        self.dims.height
    }

    pub fn depth(&self) -> u32 {
        self.dims.depth
    }

    /// True iff the coordinate lies inside `[0,width) × [0,height) × [0,depth)`
    pub fn is_in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as u32) < self.dims.width
            && (y as u32) < self.dims.height
            && (z as u32) < self.dims.depth
    }

    /// Check if a cell is blocked: out of bounds counts as occupied
    pub fn is_occupied(&self, x: i32, y: i32, z: i32) -> bool {
        match self.index(x, y, z) {
            Some(idx) => self.cells[idx].is_some(),
            None => true,
        }
    }

    /// Get cell at position, `None` if out of bounds
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<Cell> {
        self.index(x, y, z).map(|idx| self.cells[idx])
    }

    /// Set cell at position. Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, z: i32, cell: Cell) -> bool {
        match self.index(x, y, z) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Write a settled piece into the grid.
    ///
    /// Blocks that resolve outside the grid are skipped with a warning; callers
    /// are expected to have validated the position first.
    pub fn add_piece(&mut self, piece: &Piece) {
        let color = piece.color();
        for cell in piece.grid_cells() {
            if !self.set(cell.x, cell.y, cell.z, Some(color)) {
                warn!(
                    "attempted to add {} block out of bounds at ({}, {}, {})",
                    piece.kind().as_str(),
                    cell.x,
                    cell.y,
                    cell.z
                );
            }
        }
    }

    /// Check if every (x, z) cell of layer `y` is occupied
    pub fn is_layer_complete(&self, y: i32) -> bool {
        if y < 0 || y as u32 >= self.dims.height {
            return false;
        }
        self.cells[self.layer_range(y as usize)]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove layer `y`, shift every layer above it down by one and empty the top layer
    pub fn clear_layer_and_shift_down(&mut self, y: i32) {
        if y < 0 || y as u32 >= self.dims.height {
            warn!("attempted to clear invalid layer {}", y);
            return;
        }

        let height = self.dims.height as usize;
        let len = self.dims.layer_len();
        let y = y as usize;

        // Everything from y+1 upwards slides down one layer in a single move.
        let above_start = (y + 1) * len;
        let end = height * len;
        self.cells.copy_within(above_start..end, y * len);

        let top = self.layer_range(height - 1);
        self.cells[top].fill(None);
    }

    /// Clear all complete layers and return how many were cleared.
    ///
    /// Scans from the floor upwards. After a clear, the same index is checked
    /// again since the layer above has just shifted into it.
    pub fn check_and_clear_completed_layers(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = 0;
        while y < self.dims.height as i32 {
            if self.is_layer_complete(y) {
                self.clear_layer_and_shift_down(y);
                cleared += 1;
            } else {
                y += 1;
            }
        }
        cleared
    }

    /// Return the grid to all-empty at its existing dimensions
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Get a reference to the internal cells, layer-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of one horizontal layer, row-major by z then x
    pub fn layer(&self, y: i32) -> Option<&[Cell]> {
        if y < 0 || y as u32 >= self.dims.height {
            return None;
        }
        Some(&self.cells[self.layer_range(y as usize)])
    }

    /// Iterate over every occupied cell with its coordinate
    pub fn occupied_cells(&self) -> impl Iterator<Item = (IVec3, Rgb)> + '_ {
        let (w, d) = (self.dims.width as usize, self.dims.depth as usize);
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|color| {
                let x = idx % w;
                let z = (idx / w) % d;
                let y = idx / (w * d);
                (IVec3::new(x as i32, y as i32, z as i32), color)
            })
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GridDimensions::default())
    }
}
