//! The 8x8 cell array and the raw mutations a move performs on it.
//!
//! `Grid` is `Copy`: the rules engine simulates a move by copying the grid,
//! playing the move on the copy and dropping it, so nothing leaks back into
//! the live board.

use super::error::BoardError;
use super::rules::{castling, en_passant};
use super::types::{Move, MoveKind, Piece, PieceKind, PlayerId, Square};

/// Result of executing a move on a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Executed {
    /// The moving piece as it stood before the move.
    pub(crate) moved: Piece,
    pub(crate) captured: Option<Piece>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Option<Piece>; 8]; 8], // [row][col]
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    #[must_use]
    pub const fn empty() -> Self {
        Grid {
            cells: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row()][sq.col()]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.cells[sq.row()][sq.col()].as_mut()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Write `piece` into `sq`, overwriting whatever was there.
    pub(crate) fn place(&mut self, sq: Square, mut piece: Piece) {
        piece.location = sq;
        self.cells[sq.row()][sq.col()] = Some(piece);
    }

    pub(crate) fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row()][sq.col()].take()
    }

    /// Move the piece on `from` to the empty square `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Result<Piece, BoardError> {
        let mut piece = self
            .piece_at(from)
            .ok_or(BoardError::EmptySource { square: from })?;
        if !self.is_empty(to) {
            return Err(BoardError::OccupiedTarget { square: to });
        }
        self.clear(from);
        if piece.kind.tracks_moves() {
            piece.has_moved = true;
        }
        piece.location = to;
        self.place(to, piece);
        Ok(piece)
    }

    #[inline]
    #[must_use]
    pub fn neighbor(&self, sq: Square, dcol: isize, drow: isize) -> Option<Square> {
        sq.offset(dcol, drow)
    }

    /// Every piece on the grid, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }

    pub fn pieces_of(&self, owner: PlayerId) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.owner == owner)
    }

    #[must_use]
    pub fn king_square(&self, owner: PlayerId) -> Option<Square> {
        self.pieces_of(owner)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.location)
    }

    /// Revoke every pawn's en-passant permission.
    pub(crate) fn clear_en_passant(&mut self) {
        for piece in self.cells.iter_mut().flatten().flatten() {
            piece.en_passant = None;
        }
    }

    /// Carry out a move without judging it: clear en-passant windows, remove
    /// any captured piece, relocate the mover (and the rook when castling),
    /// then open a new en-passant window after a double pawn advance.
    ///
    /// Promotion is left to the caller so the board can reissue piece ids.
    pub(crate) fn execute(&mut self, mv: Move) -> Result<Executed, BoardError> {
        let moved = self
            .piece_at(mv.from)
            .ok_or(BoardError::EmptySource { square: mv.from })?;
        self.clear_en_passant();

        let captured = match mv.kind {
            MoveKind::EnPassant => {
                let target = moved
                    .en_passant
                    .filter(|ep| ep.landing == mv.to)
                    .ok_or(BoardError::NoPieceToCapture { square: mv.to })?;
                Some(
                    self.clear(target.capture)
                        .ok_or(BoardError::NoPieceToCapture {
                            square: target.capture,
                        })?,
                )
            }
            MoveKind::Capture | MoveKind::Promotion(_) => self.clear(mv.to),
            MoveKind::Normal | MoveKind::CastleKingside | MoveKind::CastleQueenside => None,
        };

        self.relocate(mv.from, mv.to)?;

        if mv.is_castling() {
            let (rook_from, rook_to) = castling::rook_squares(mv.from, mv.to);
            self.relocate(rook_from, rook_to)?;
        }

        if en_passant::is_double_advance(&moved, mv.to) {
            en_passant::grant(self, mv.to, moved.owner);
        }

        Ok(Executed { moved, captured })
    }

    /// Turn the pawn on `sq` into `kind`, keeping its id.
    pub(crate) fn promote_in_place(
        &mut self,
        sq: Square,
        kind: PieceKind,
    ) -> Result<Piece, BoardError> {
        let piece = self
            .piece_mut(sq)
            .ok_or(BoardError::EmptySource { square: sq })?;
        if piece.kind != PieceKind::Pawn {
            return Err(BoardError::NotPromotable { square: sq });
        }
        piece.kind = kind;
        piece.promoted = true;
        Ok(*piece)
    }

    /// `execute` plus promotion: the full effect of a move on a scratch grid.
    pub(crate) fn play(&mut self, mv: Move) -> Result<Executed, BoardError> {
        let executed = self.execute(mv)?;
        if let MoveKind::Promotion(kind) = mv.kind {
            self.promote_in_place(mv.to, kind)?;
        }
        Ok(executed)
    }
}
