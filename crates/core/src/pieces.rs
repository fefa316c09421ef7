//! Tetromino shapes - fixed orientation tables
//!
//! Each kind has one shape per rotation state: four mino offsets from the
//! piece anchor inside a 4x4 box. There are no wall kicks; a rotation whose
//! target shape collides is simply refused by the rule engine.

use tui_arcade_types::{PieceKind, Rotation};

/// Four mino offsets from the piece anchor.
pub type PieceShape = [(i8, i8); 4];

/// Shape table lookup for a kind and rotation.
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let ri = match rotation {
        Rotation::North => 0,
        Rotation::East => 1,
        Rotation::South => 2,
        Rotation::West => 3,
    };
    match kind {
        PieceKind::I => I_SHAPES[ri],
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPES[ri],
        PieceKind::S => S_SHAPES[ri],
        PieceKind::Z => Z_SHAPES[ri],
        PieceKind::J => J_SHAPES[ri],
        PieceKind::L => L_SHAPES[ri],
    }
}

const I_SHAPES: [PieceShape; 4] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

// O never changes under rotation.
const O_SHAPE: PieceShape = [(1, 0), (2, 0), (1, 1), (2, 1)];

const T_SHAPES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_SHAPES: [PieceShape; 4] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_SHAPES: [PieceShape; 4] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

const J_SHAPES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_SHAPES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn every_shape_has_four_distinct_minos_in_box() {
        for kind in PieceKind::ALL {
            for rot in ROTATIONS {
                let s = shape(kind, rot);
                for &(dx, dy) in &s {
                    assert!((0..4).contains(&dx) && (0..4).contains(&dy));
                }
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(s[i], s[j], "{kind:?} {rot:?} repeats a mino");
                    }
                }
            }
        }
    }

    #[test]
    fn o_piece_is_rotation_invariant() {
        let north = shape(PieceKind::O, Rotation::North);
        for rot in ROTATIONS {
            assert_eq!(shape(PieceKind::O, rot), north);
        }
    }

    #[test]
    fn i_piece_alternates_horizontal_vertical() {
        let north = shape(PieceKind::I, Rotation::North);
        assert!(north.iter().all(|&(_, dy)| dy == 1));
        let east = shape(PieceKind::I, Rotation::East);
        assert!(east.iter().all(|&(dx, _)| dx == 2));
    }
}
