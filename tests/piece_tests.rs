//! Piece tests - templates, rotation, and spawn placement

use blocktris::core::{Piece, Shape};
use blocktris::types::{Rgb, ShapeKind};

const COLOR: Rgb = Rgb::new(0, 255, 255);

#[test]
fn test_every_template_has_four_cells() {
    for kind in ShapeKind::ALL {
        assert_eq!(Shape::template(kind).filled_count(), 4, "{kind:?}");
    }
}

#[test]
fn test_four_rotations_restore_every_template() {
    for kind in ShapeKind::ALL {
        let original = Shape::template(kind);
        let mut shape = original;
        for turn in 1..=4 {
            shape = shape.rotated_cw();
            if turn < 4 {
                assert_eq!(shape.filled_count(), 4);
            }
        }
        assert_eq!(shape, original, "{kind:?}");
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    let t = Shape::template(ShapeKind::T);
    let r = t.rotated_cw();
    assert_eq!((t.rows(), t.cols()), (2, 3));
    assert_eq!((r.rows(), r.cols()), (3, 2));

    // [[1,1,1],[0,1,0]] turned clockwise is [[0,1],[1,1],[0,1]].
    assert_eq!(r, Shape::from_rows(&[&[0, 1], &[1, 1], &[0, 1]]));
}

#[test]
fn test_i_piece_stands_upright() {
    let upright = Shape::template(ShapeKind::I).rotated_cw();
    assert_eq!((upright.rows(), upright.cols()), (4, 1));
    assert!((0..4).all(|r| upright.is_filled(r, 0)));
}

#[test]
fn test_spawn_is_centered_on_top_row() {
    // 13 columns: 13/2 - width/2
    assert_eq!(Piece::spawn(ShapeKind::O, COLOR, 13).x, 5);
    assert_eq!(Piece::spawn(ShapeKind::T, COLOR, 13).x, 5);
    assert_eq!(Piece::spawn(ShapeKind::I, COLOR, 13).x, 4);
    assert_eq!(Piece::spawn(ShapeKind::I, COLOR, 10).x, 3);

    for kind in ShapeKind::ALL {
        let piece = Piece::spawn(kind, COLOR, 13);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.color, COLOR);
        assert_eq!(piece.kind, kind);
    }
}

#[test]
fn test_rotate_keeps_origin() {
    let mut piece = Piece::spawn(ShapeKind::L, COLOR, 13);
    let (x, y) = (piece.x, piece.y);
    piece.rotate();
    assert_eq!((piece.x, piece.y), (x, y));
    assert_ne!(piece.shape, Shape::template(ShapeKind::L));
}

#[test]
fn test_cells_are_absolute() {
    let mut piece = Piece::spawn(ShapeKind::S, COLOR, 10);
    piece.translate(-4, 2);
    // S at x=0 after the shift: [[0,1,1],[1,1,0]]
    let cells: Vec<_> = piece.cells().collect();
    assert_eq!(cells, vec![(1, 2), (2, 2), (0, 3), (1, 3)]);
}
