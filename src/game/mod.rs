//! Game controller: turn order, move requests and game status.
//!
//! This is the surface front ends talk to. Moves arrive as text such as
//! `"e2 e4"`, are validated by the rules engine and applied to the board;
//! the controller then works out whether the opponent is in check or mated.

mod controller;
mod notation;
mod shared;

pub use controller::{BoardState, Game, GameStatus, PlayedMove, Player, TurnState};
pub use notation::MoveRequest;
pub use shared::SharedGame;
