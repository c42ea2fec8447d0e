use crate::board::error::MoveError;
use crate::board::types::{Piece, PieceKind, Square, PROMOTION_TARGETS};

/// Whether `piece` moving onto `to` is a pawn arriving on its far row.
#[must_use]
pub fn reaches_far_row(piece: &Piece, to: Square) -> bool {
    piece.kind() == PieceKind::Pawn && to.row() == piece.owner().promotion_row()
}

/// The caller's promotion choice, queen when none was given.
pub(crate) fn target_kind(choice: Option<PieceKind>) -> Result<PieceKind, MoveError> {
    match choice {
        None => Ok(PieceKind::Queen),
        Some(kind) if PROMOTION_TARGETS.contains(&kind) => Ok(kind),
        Some(kind) => Err(MoveError::InvalidPromotion {
            found: kind.to_char(),
        }),
    }
}
