use std::collections::BTreeSet;

use super::coords::Orientation;
use super::error::BoardError;
use super::grid::Grid;
use super::types::{Color, Move, MoveKind, Piece, PieceId, PieceKind, PlayerId, Square};

/// Back-rank layout by algebraic file, a through h.
pub(crate) const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A player's pieces: those still on the board and those captured from them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    pub(crate) active: BTreeSet<PieceId>,
    pub(crate) lost: Vec<Piece>,
}

impl Roster {
    pub fn active(&self) -> &BTreeSet<PieceId> {
        &self.active
    }

    /// Pieces the opponent has captured, in capture order.
    pub fn lost(&self) -> &[Piece] {
        &self.lost
    }

    pub fn contains(&self, id: PieceId) -> bool {
        self.active.contains(&id)
    }
}

/// Everything a board mutation changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// The moving piece before the move.
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// The new piece created by promotion.
    pub promoted: Option<Piece>,
}

/// The board: the grid plus both players' rosters.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) rosters: [Roster; 2],
    pub(crate) next_id: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position with Player 1 as White.
    pub fn new() -> Self {
        Self::standard(Orientation::Standard, Color::White)
    }

    /// Standard starting position: Player 1 on grid rows 0-1 playing
    /// `player_one`, files laid out according to `orientation`.
    pub fn standard(orientation: Orientation, player_one: Color) -> Self {
        let mut board = Board::empty();
        for owner in PlayerId::BOTH {
            let color = match owner {
                PlayerId::Player1 => player_one,
                PlayerId::Player2 => player_one.opponent(),
            };
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let col = orientation.grid_col(file);
                board.install(Square::from_grid(col, owner.back_row()), *kind, owner, color);
                board.install(
                    Square::from_grid(col, owner.pawn_row()),
                    PieceKind::Pawn,
                    owner,
                    color,
                );
            }
        }
        board
    }

    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: Grid::empty(),
            rosters: [Roster::default(), Roster::default()],
            next_id: 0,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid.piece_at(sq)
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.grid.is_empty(sq)
    }

    pub fn roster(&self, owner: PlayerId) -> &Roster {
        &self.rosters[owner.index()]
    }

    pub fn pieces(&self, owner: PlayerId) -> impl Iterator<Item = Piece> + '_ {
        self.grid.pieces_of(owner)
    }

    pub fn king_square(&self, owner: PlayerId) -> Option<Square> {
        self.grid.king_square(owner)
    }

    #[inline]
    pub fn neighbor(&self, sq: Square, dcol: isize, drow: isize) -> Option<Square> {
        self.grid.neighbor(sq, dcol, drow)
    }

    fn allocate_id(&mut self) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create a new piece on an empty square and enrol it in its owner's roster.
    ///
    /// Pawns placed away from their starting row count as having moved.
    pub fn spawn(
        &mut self,
        sq: Square,
        kind: PieceKind,
        owner: PlayerId,
        color: Color,
    ) -> Result<PieceId, BoardError> {
        if !self.is_empty(sq) {
            return Err(BoardError::OccupiedTarget { square: sq });
        }
        Ok(self.install(sq, kind, owner, color))
    }

    /// Unchecked [`Board::spawn`]; `sq` must be empty.
    pub(crate) fn install(
        &mut self,
        sq: Square,
        kind: PieceKind,
        owner: PlayerId,
        color: Color,
    ) -> PieceId {
        let id = self.allocate_id();
        let mut piece = Piece::new(id, kind, owner, color, sq);
        piece.has_moved = kind == PieceKind::Pawn && sq.row() != owner.pawn_row();
        self.place(sq, piece);
        id
    }

    /// Direct grid write that also enrols the piece in its owner's roster.
    pub(crate) fn place(&mut self, sq: Square, piece: Piece) {
        self.rosters[piece.owner.index()].active.insert(piece.id);
        self.grid.place(sq, piece);
    }

    /// Direct grid erase. Roster membership is the caller's business.
    pub(crate) fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.grid.clear(sq)
    }

    /// Mark a piece as already moved (builder support).
    pub(crate) fn mark_moved(&mut self, sq: Square) {
        if let Some(piece) = self.grid.piece_mut(sq) {
            piece.has_moved = true;
        }
    }

    /// Move the piece on `from` to the empty square `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Result<(), BoardError> {
        self.grid.relocate(from, to).map(|_| ())
    }

    /// Take the piece on `sq` off the board into its owner's lost pile.
    pub fn capture_at(&mut self, sq: Square) -> Result<Piece, BoardError> {
        let piece = self
            .clear(sq)
            .ok_or(BoardError::NoPieceToCapture { square: sq })?;
        self.retire(piece);
        Ok(piece)
    }

    fn retire(&mut self, piece: Piece) {
        let roster = &mut self.rosters[piece.owner.index()];
        roster.active.remove(&piece.id);
        roster.lost.push(piece);
    }

    /// Replace the pawn on `sq` with a new piece of `kind`.
    ///
    /// The pawn leaves its roster for good; the new piece gets a fresh id.
    pub fn promote(&mut self, sq: Square, kind: PieceKind) -> Result<Piece, BoardError> {
        let pawn = self
            .piece_at(sq)
            .ok_or(BoardError::EmptySource { square: sq })?;
        self.grid.promote_in_place(sq, kind)?;
        let id = self.allocate_id();
        let roster = &mut self.rosters[pawn.owner.index()];
        roster.active.remove(&pawn.id);
        roster.active.insert(id);
        let piece = self
            .grid
            .piece_mut(sq)
            .ok_or(BoardError::EmptySource { square: sq })?;
        piece.id = id;
        Ok(*piece)
    }

    pub fn clear_en_passant(&mut self) {
        self.grid.clear_en_passant();
    }

    /// Carry out an already validated move, keeping rosters in step.
    pub fn apply(&mut self, mv: Move) -> Result<MoveRecord, BoardError> {
        let executed = self.grid.execute(mv)?;
        if let Some(captured) = executed.captured {
            self.retire(captured);
        }
        let promoted = match mv.kind {
            MoveKind::Promotion(kind) => Some(self.promote(mv.to, kind)?),
            _ => None,
        };
        debug_assert!(self.is_consistent(), "board and rosters diverged after {mv}");
        Ok(MoveRecord {
            mv,
            piece: executed.moved,
            captured: executed.captured,
            promoted,
        })
    }

    /// Every active roster id sits on the grid exactly once, every grid piece
    /// is in its owner's roster, and every piece knows its own square.
    pub fn is_consistent(&self) -> bool {
        let mut seen = [BTreeSet::new(), BTreeSet::new()];
        for sq in Square::all() {
            if let Some(piece) = self.piece_at(sq) {
                if piece.location != sq || !seen[piece.owner.index()].insert(piece.id) {
                    return false;
                }
            }
        }
        PlayerId::BOTH.iter().all(|owner| {
            let roster = self.roster(*owner);
            seen[owner.index()] == roster.active
                && roster.lost.iter().all(|p| !roster.active.contains(&p.id))
        })
    }
}
