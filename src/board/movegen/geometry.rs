//! Direction tables for each piece kind.

use crate::board::types::PieceKind;

pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub(crate) const OMNI: [(isize, isize); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(crate) const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Longest possible slide on an 8x8 board.
pub(crate) const MAX_SLIDE: usize = 7;

/// (dcol, drow) vectors a piece walks along and how far it may walk each.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Geometry {
    pub(crate) directions: &'static [(isize, isize)],
    pub(crate) max_steps: usize,
}

impl Geometry {
    /// Geometry of every kind except the pawn, whose moves depend on its
    /// owner and on what stands in front of it.
    pub(crate) const fn of(kind: PieceKind) -> Option<Geometry> {
        let (directions, max_steps): (&'static [(isize, isize)], usize) = match kind {
            PieceKind::Pawn => return None,
            PieceKind::Knight => (&KNIGHT_JUMPS, 1),
            PieceKind::Bishop => (&DIAGONAL, MAX_SLIDE),
            PieceKind::Rook => (&ORTHOGONAL, MAX_SLIDE),
            PieceKind::Queen => (&OMNI, MAX_SLIDE),
            PieceKind::King => (&OMNI, 1),
        };
        Some(Geometry {
            directions,
            max_steps,
        })
    }
}
