//! Castling: the king moves two columns toward an unmoved rook on its row and
//! the rook jumps to the square the king crossed.
//!
//! Sides are told apart by the rook's distance from the king (three columns
//! kingside, four queenside), which holds in both board orientations.

use super::check::is_in_check;
use crate::board::error::{CastleBlock, MoveError};
use crate::board::grid::Grid;
use crate::board::types::{Move, MoveKind, Piece, PieceKind, Square};

pub(crate) fn is_castle_attempt(piece: &Piece, to: Square) -> bool {
    let from = piece.location();
    piece.kind() == PieceKind::King && to.row() == from.row() && to.col().abs_diff(from.col()) == 2
}

/// Both squares two columns away from the king on its row.
pub(crate) fn targets(king: &Piece) -> impl Iterator<Item = Square> {
    let from = king.location();
    [-2, 2].into_iter().filter_map(move |dcol| from.offset(dcol, 0))
}

/// Rook origin (the corner on the king's side of travel) and destination
/// (the square the king passes over).
pub(crate) fn rook_squares(king_from: Square, king_to: Square) -> (Square, Square) {
    let row = king_from.row();
    if king_to.col() > king_from.col() {
        (Square::from_grid(7, row), Square::from_grid(king_from.col() + 1, row))
    } else {
        (Square::from_grid(0, row), Square::from_grid(king_from.col() - 1, row))
    }
}

pub(crate) fn validate(grid: &Grid, king: &Piece, to: Square) -> Result<Move, MoveError> {
    let blocked = |reason| MoveError::CastleUnavailable { reason };
    let from = king.location();

    if king.has_moved() {
        return Err(blocked(CastleBlock::KingMoved));
    }
    let (rook_from, crossed) = rook_squares(from, to);
    let rook = grid
        .piece_at(rook_from)
        .filter(|p| p.kind() == PieceKind::Rook && p.owner() == king.owner())
        .ok_or(blocked(CastleBlock::NoRook))?;
    if rook.has_moved() {
        return Err(blocked(CastleBlock::RookMoved));
    }

    let (low, high) = if from.col() < rook_from.col() {
        (from.col(), rook_from.col())
    } else {
        (rook_from.col(), from.col())
    };
    if (low + 1..high).any(|col| !grid.is_empty(Square::from_grid(col, from.row()))) {
        return Err(blocked(CastleBlock::PathBlocked));
    }

    if is_in_check(grid, king.owner()) {
        return Err(blocked(CastleBlock::KingInCheck));
    }
    if attacked_with_king_on(grid, king, crossed) {
        return Err(blocked(CastleBlock::PassesThroughCheck));
    }
    if attacked_with_king_on(grid, king, to) {
        return Err(blocked(CastleBlock::DestinationAttacked));
    }

    let kind = if rook_from.col().abs_diff(from.col()) == 3 {
        MoveKind::CastleKingside
    } else {
        MoveKind::CastleQueenside
    };
    Ok(Move::new(from, to, kind))
}

fn attacked_with_king_on(grid: &Grid, king: &Piece, sq: Square) -> bool {
    let mut scratch = *grid;
    scratch.relocate(king.location(), sq).is_err() || is_in_check(&scratch, king.owner())
}
