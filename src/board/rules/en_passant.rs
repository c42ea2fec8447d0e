//! En-passant bookkeeping.
//!
//! Windows are opened here right after a double pawn advance and cleared by
//! `Grid::execute` at the start of every half-move, so each lasts one ply.

use crate::board::grid::Grid;
use crate::board::types::{EnPassant, Piece, PieceKind, PlayerId, Square};

/// Whether `piece` moving to `to` is a two-square pawn advance.
pub(crate) fn is_double_advance(piece: &Piece, to: Square) -> bool {
    let from = piece.location();
    piece.kind() == PieceKind::Pawn && from.col() == to.col() && from.row().abs_diff(to.row()) == 2
}

/// Give every enemy pawn beside the pawn that just landed on `moved` the
/// right to capture it by stepping onto the square it skipped.
pub(crate) fn grant(grid: &mut Grid, moved: Square, mover: PlayerId) {
    let Some(landing) = moved.offset(0, -mover.forward()) else {
        return;
    };
    for dcol in [-1, 1] {
        let Some(beside) = moved.offset(dcol, 0) else {
            continue;
        };
        if let Some(pawn) = grid.piece_mut(beside) {
            if pawn.kind() == PieceKind::Pawn && pawn.owner() != mover {
                pawn.en_passant = Some(EnPassant {
                    capture: moved,
                    landing,
                });
            }
        }
    }
}
