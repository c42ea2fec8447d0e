//! Core chess types.
//!
//! This module contains the value types shared by the board, the move
//! generator and the rules engine:
//! - `PieceKind`, `Color` and `PlayerId`
//! - `Piece` - a piece with its location and move history
//! - `Square` - a grid cell
//! - `Move`, `MoveKind` and `MoveMap`

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveKind, MoveMap};
pub use piece::{
    Color, EnPassant, Piece, PieceDescriptor, PieceId, PieceKind, PlayerId, PROMOTION_TARGETS,
};
pub use square::Square;

pub(crate) use square::{file_to_index, rank_to_index};
