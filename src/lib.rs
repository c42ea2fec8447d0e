pub mod board;
pub mod game;

pub use board::rules::CheckStatus;
pub use board::{Board, BoardBuilder, Color, Move, MoveError, MoveKind, PieceKind, PlayerId, Square};
pub use game::{Game, GameStatus, SharedGame};
