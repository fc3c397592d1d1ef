//! Collision oracle - pure validity checks of a piece against the grid
//!
//! Nothing here mutates the grid or the piece. A collision is an ordinary
//! boolean outcome that drives the session state machine.

use glam::Vec3;

use crate::grid::Grid;
use crate::piece::Piece;

/// One step towards the floor
pub const DOWN: Vec3 = Vec3::NEG_Y;

/// Check if all four blocks are inside the grid and on empty cells
pub fn is_valid_position(grid: &Grid, piece: &Piece) -> bool {
    piece
        .grid_cells()
        .iter()
        .all(|c| grid.is_in_bounds(c.x, c.y, c.z) && !grid.is_occupied(c.x, c.y, c.z))
}

/// Calculate where the piece would come to rest if dropped straight down.
///
/// Returns an unmoved copy when the piece is already resting, and `None`
/// when there is no piece.
pub fn ghost_position(grid: &Grid, piece: Option<&Piece>) -> Option<Piece> {
    let mut ghost = *piece?;
    loop {
        let test = ghost.translated(DOWN);
        if !is_valid_position(grid, &test) {
            return Some(ghost);
        }
        ghost = test;
    }
}

/// Number of whole layers the piece can fall before landing
pub fn drop_distance(grid: &Grid, piece: &Piece) -> u32 {
    let mut distance = 0;
    let mut test = piece.translated(DOWN);
    while is_valid_position(grid, &test) {
        distance += 1;
        test.translate(DOWN);
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Rgb};

    #[test]
    fn test_ghost_of_nothing_is_nothing() {
        assert!(ghost_position(&Grid::default(), None).is_none());
    }

    #[test]
    fn test_ghost_rests_on_floor() {
        let grid = Grid::default();
        let piece = Piece::new(PieceKind::T, Vec3::new(4.0, 10.0, 4.0));
        let ghost = ghost_position(&grid, Some(&piece)).unwrap();
        assert_eq!(ghost.bottom(), 0);
        assert_eq!(ghost.blocks(), piece.blocks());
        assert_eq!(drop_distance(&grid, &piece), 10);
    }

    #[test]
    fn test_ghost_rests_on_settled_block() {
        let mut grid = Grid::default();
        grid.set(4, 3, 4, Some(Rgb::new(1, 2, 3)));
        let piece = Piece::new(PieceKind::O, Vec3::new(4.0, 12.0, 4.0));
        let ghost = ghost_position(&grid, Some(&piece)).unwrap();
        assert_eq!(ghost.bottom(), 4);
    }

    #[test]
    fn test_resting_piece_ghost_is_unmoved() {
        let grid = Grid::default();
        let piece = Piece::new(PieceKind::O, Vec3::new(2.0, 0.0, 2.0));
        assert_eq!(ghost_position(&grid, Some(&piece)), Some(piece));
        assert_eq!(drop_distance(&grid, &piece), 0);
    }

    #[test]
    fn test_below_floor_is_invalid() {
        let grid = Grid::default();
        // I piece has a block one below its pivot.
        let piece = Piece::new(PieceKind::I, Vec3::new(4.0, 0.0, 4.0));
        assert!(!is_valid_position(&grid, &piece));
    }
}
