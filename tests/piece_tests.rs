//! Piece tests - construction, catalog and 3-D rotations

use glam::{IVec3, Vec3};
use tetris3d::core::{catalog, Piece, PieceError};
use tetris3d::types::{Axis, PieceKind, Rgb, RotationDirection};

fn sorted(mut cells: [IVec3; 4]) -> [IVec3; 4] {
    cells.sort_by_key(|c| (c.x, c.y, c.z));
    cells
}

#[test]
fn test_from_name_accepts_catalog_names() {
    for kind in PieceKind::ALL {
        let piece = Piece::from_name(kind.as_str(), Vec3::ZERO).unwrap();
        assert_eq!(piece.kind(), kind);
        assert_eq!(piece.blocks(), &catalog::base_shape(kind));
    }
    assert_eq!(
        Piece::from_name("t", Vec3::ZERO).map(|p| p.kind()),
        Ok(PieceKind::T)
    );
}

#[test]
fn test_from_name_rejects_unknown() {
    let err = Piece::from_name("Q", Vec3::ZERO).unwrap_err();
    assert_eq!(err, PieceError::InvalidPieceType("Q".to_string()));
    assert!(err.to_string().contains("invalid piece type"));
}

#[test]
fn test_catalog_colors() {
    assert_eq!(catalog::color(PieceKind::I), Rgb::from_hex(0x00FFFF));
    assert_eq!(catalog::color(PieceKind::L), Rgb::from_hex(0xFFA500));
    assert_eq!(catalog::color(PieceKind::T), Rgb::from_hex(0x800080));
}

#[test]
fn test_translate_keeps_shape() {
    let mut piece = Piece::new(PieceKind::S, Vec3::new(4.0, 17.0, 4.0));
    let blocks = *piece.blocks();
    piece.translate(Vec3::new(1.0, -2.0, 3.0));
    assert_eq!(piece.position(), Vec3::new(5.0, 15.0, 7.0));
    assert_eq!(piece.blocks(), &blocks);
}

#[test]
fn test_i_piece_about_each_axis() {
    let i = Piece::new(PieceKind::I, Vec3::ZERO);

    // Along Y; a Y turn leaves a vertical bar in place.
    assert_eq!(
        sorted(*i.rotated(Axis::Y, RotationDirection::Positive).blocks()),
        sorted(*i.blocks())
    );

    // +X turns +Y into +Z.
    assert_eq!(
        sorted(*i.rotated(Axis::X, RotationDirection::Positive).blocks()),
        sorted([
            IVec3::new(0, 0, 2),
            IVec3::new(0, 0, 1),
            IVec3::ZERO,
            IVec3::new(0, 0, -1)
        ])
    );

    // +Z turns +Y into -X.
    assert_eq!(
        sorted(*i.rotated(Axis::Z, RotationDirection::Positive).blocks()),
        sorted([
            IVec3::new(-2, 0, 0),
            IVec3::new(-1, 0, 0),
            IVec3::ZERO,
            IVec3::new(1, 0, 0)
        ])
    );
}

#[test]
fn test_negative_is_inverse_of_positive() {
    for kind in PieceKind::ALL {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let piece = Piece::new(kind, Vec3::new(3.0, 5.0, 3.0));
            let back = piece
                .rotated(axis, RotationDirection::Positive)
                .rotated(axis, RotationDirection::Negative);
            assert_eq!(back.blocks(), piece.blocks(), "{kind:?} about {axis:?}");
        }
    }
}

#[test]
fn test_many_turns_stay_integral() {
    let mut piece = Piece::new(PieceKind::L, Vec3::ZERO);
    let turns = [Axis::X, Axis::Y, Axis::Z, Axis::Y, Axis::X];
    for _ in 0..200 {
        for axis in turns {
            piece.rotate(axis, RotationDirection::Positive);
        }
    }
    // Still a rigid tetromino: four distinct cells, all within reach of the pivot.
    let blocks = *piece.blocks();
    for (i, a) in blocks.iter().enumerate() {
        assert!(a.abs().max_element() <= 1);
        for b in &blocks[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!((piece.orientation().length() - 1.0).abs() < 1e-4);
}

#[test]
fn test_copies_are_independent() {
    let original = Piece::new(PieceKind::Z, Vec3::new(4.0, 10.0, 4.0));
    let mut copy = original;
    copy.rotate(Axis::X, RotationDirection::Positive);
    copy.translate(Vec3::NEG_Y);
    assert_ne!(copy, original);
    assert_eq!(original.blocks(), &catalog::base_shape(PieceKind::Z));
    assert_eq!(original.position(), Vec3::new(4.0, 10.0, 4.0));
}
