//! Chess board representation and rules.
//!
//! An 8x8 grid of optional pieces, per-piece move generation and the rules
//! that sit on top of it: check, checkmate, self-check prevention, en
//! passant, castling and promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::{rules, Board, PlayerId};
//!
//! let board = Board::new();
//! let moves = rules::legal_moves(board.grid(), PlayerId::Player1);
//! println!("Starting position has {} legal moves", moves.len());
//! assert_eq!(moves.len(), 20);
//! ```

mod builder;
mod coords;
mod error;
mod grid;
pub mod movegen;
pub mod prelude;
pub mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use coords::Orientation;
pub use error::{BoardError, CastleBlock, MoveError, SquareError};
pub use grid::Grid;
pub use state::{Board, MoveRecord, Roster};
pub use types::{
    Color, EnPassant, Move, MoveKind, MoveMap, Piece, PieceDescriptor, PieceId, PieceKind,
    PlayerId, Square, PROMOTION_TARGETS,
};
