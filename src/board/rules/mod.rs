//! Legality on top of raw move generation.
//!
//! Every function takes the grid (and the side concerned) explicitly. King
//! safety is decided by playing the move on a copy of the grid and asking
//! whether the mover's king is attacked afterwards.

pub(crate) mod castling;
mod check;
pub(crate) mod en_passant;
mod promotion;

use log::trace;

pub use check::{check_status, checkers, escapes, is_in_check, CheckStatus, Checker, Escape};
pub use promotion::reaches_far_row;

use super::error::MoveError;
use super::grid::Grid;
use super::movegen;
use super::types::{Move, MoveKind, Piece, PieceKind, PlayerId, Square, PROMOTION_TARGETS};

/// Path validation for the piece on `from`: the target must be in its move
/// map, every square before the target must be empty, and an occupied target
/// must hold an enemy. Returns the path on success.
pub fn validate_path(grid: &Grid, from: Square, to: Square) -> Result<Vec<Square>, MoveError> {
    let piece = grid
        .piece_at(from)
        .ok_or(MoveError::EmptySource { square: from })?;
    validated_path(grid, &piece, to).ok_or(MoveError::IllegalTarget { from, to })
}

pub(crate) fn validated_path(grid: &Grid, piece: &Piece, to: Square) -> Option<Vec<Square>> {
    let mut map = movegen::reachable(grid, piece);
    let path = map.remove(&to)?;
    let (_, before) = path.split_last()?;
    if before.iter().any(|sq| !grid.is_empty(*sq)) {
        return None;
    }
    if grid
        .piece_at(to)
        .is_some_and(|occupant| !occupant.is_enemy_of(piece))
    {
        return None;
    }
    Some(path)
}

fn classify(
    grid: &Grid,
    piece: &Piece,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<MoveKind, MoveError> {
    if piece.kind() == PieceKind::Pawn {
        if reaches_far_row(piece, to) {
            return Ok(MoveKind::Promotion(promotion::target_kind(promotion)?));
        }
        if piece
            .en_passant()
            .is_some_and(|ep| ep.landing == to && grid.is_empty(to))
        {
            return Ok(MoveKind::EnPassant);
        }
    }
    Ok(if grid.is_empty(to) {
        MoveKind::Normal
    } else {
        MoveKind::Capture
    })
}

/// A pseudo-legal move: geometry, blocking and special-move preconditions,
/// but not the mover's own king safety.
fn candidate(
    grid: &Grid,
    piece: &Piece,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<Move, MoveError> {
    if castling::is_castle_attempt(piece, to) {
        return castling::validate(grid, piece, to);
    }
    let from = piece.location();
    validated_path(grid, piece, to).ok_or(MoveError::IllegalTarget { from, to })?;
    Ok(Move::new(from, to, classify(grid, piece, to, promotion)?))
}

/// Every pseudo-legal move of `piece` onto `to`, one per promotion choice
/// when the pawn reaches the far row.
pub(crate) fn expand(grid: &Grid, piece: &Piece, to: Square) -> Vec<Move> {
    if reaches_far_row(piece, to) {
        PROMOTION_TARGETS
            .iter()
            .filter_map(|kind| candidate(grid, piece, to, Some(*kind)).ok())
            .collect()
    } else {
        candidate(grid, piece, to, None).into_iter().collect()
    }
}

/// Full legality check of a move request by `side`.
pub fn check_move(
    grid: &Grid,
    side: PlayerId,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<Move, MoveError> {
    let piece = grid
        .piece_at(from)
        .ok_or(MoveError::EmptySource { square: from })?;
    if piece.owner() != side {
        return Err(MoveError::NotOwner { square: from });
    }
    let mv = candidate(grid, &piece, to, promotion)?;
    if leaves_king_in_check(grid, side, mv) {
        trace!("{mv} rejected: {side} would be left in check");
        return Err(MoveError::SelfCheck { from, to });
    }
    Ok(mv)
}

/// Play `mv` on a scratch copy and report whether `side`'s king is attacked.
#[must_use]
pub fn leaves_king_in_check(grid: &Grid, side: PlayerId, mv: Move) -> bool {
    let mut scratch = *grid;
    match scratch.play(mv) {
        Ok(_) => is_in_check(&scratch, side),
        Err(_) => true,
    }
}

/// Every legal move available to `side`.
#[must_use]
pub fn legal_moves(grid: &Grid, side: PlayerId) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece in grid.pieces_of(side) {
        for to in movegen::reachable(grid, &piece).into_keys() {
            moves.extend(expand(grid, &piece, to));
        }
        if piece.kind() == PieceKind::King {
            moves.extend(
                castling::targets(&piece).filter_map(|to| castling::validate(grid, &piece, to).ok()),
            );
        }
    }
    moves.retain(|mv| !leaves_king_in_check(grid, side, *mv));
    moves
}
