//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert!(!is_in_check(board.grid(), PlayerId::Player1));
//! ```

pub use super::rules::{check_move, check_status, is_in_check, legal_moves, CheckStatus};
pub use super::{
    Board, BoardBuilder, Color, Move, MoveError, MoveKind, Orientation, Piece, PieceKind,
    PlayerId, Square, SquareError,
};
