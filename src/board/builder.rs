//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece; there is no text format for
//! whole positions.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, PieceKind, PlayerId, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let a2: Square = "a2".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, PlayerId::Player1, PieceKind::King)
//!     .piece(e8, PlayerId::Player2, PieceKind::King)
//!     .piece(a2, PlayerId::Player1, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.piece_at(a2).map(|p| p.kind()), Some(PieceKind::Pawn));
//! ```

use super::coords::Orientation;
use super::state::BACK_RANK;
use super::{Board, Color, PieceKind, PlayerId, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, PlayerId, PieceKind)>,
    moved: Vec<Square>,
    player_one: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            moved: Vec::new(),
            player_one: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position
    /// (Player 1 as White).
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let orientation = Orientation::Standard;
        for owner in PlayerId::BOTH {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                let col = orientation.grid_col(file);
                builder
                    .pieces
                    .push((Square::from_grid(col, owner.back_row()), owner, kind));
                builder.pieces.push((
                    Square::from_grid(col, owner.pawn_row()),
                    owner,
                    PieceKind::Pawn,
                ));
            }
        }
        builder
    }

    /// Color played by Player 1; Player 2 gets the other.
    #[must_use]
    pub const fn player_one(mut self, color: Color) -> Self {
        self.player_one = color;
        self
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, owner: PlayerId, kind: PieceKind) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, owner, kind));
        self
    }

    /// Mark the piece on a square as having moved (no castling, no double step).
    #[must_use]
    pub fn moved(mut self, square: Square) -> Self {
        self.moved.push(square);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, owner, kind) in self.pieces {
            let color = match owner {
                PlayerId::Player1 => self.player_one,
                PlayerId::Player2 => self.player_one.opponent(),
            };
            // `piece` keeps squares unique.
            board.install(square, kind, owner, color);
        }
        for square in self.moved {
            board.mark_moved(square);
        }

        board
    }
}
