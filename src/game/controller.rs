//! Game controller implementation.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::notation::MoveRequest;
use crate::board::rules::{self, CheckStatus};
use crate::board::{
    Board, Color, Move, MoveError, MoveRecord, Orientation, Piece, PieceDescriptor, PlayerId,
    Square,
};

/// Every square name mapped to what stands there, for renderers.
pub type BoardState = BTreeMap<String, Option<PieceDescriptor>>;

/// Outcome of the game so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Incomplete,
    Won(PlayerId),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Incomplete => write!(f, "INCOMPLETE"),
            GameStatus::Won(player) => write!(f, "{player} Wins"),
        }
    }
}

/// Where the turn sequence stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnState {
    AwaitingMove(PlayerId),
    Won(PlayerId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    color: Color,
    in_check: bool,
}

impl Player {
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn in_check(&self) -> bool {
        self.in_check
    }
}

/// A move the controller accepted, with its consequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayedMove {
    pub record: MoveRecord,
    pub mover: PlayerId,
    /// Check status of the mover's opponent after the move.
    pub check: CheckStatus,
}

/// One game of chess between Player 1 and Player 2.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    orientation: Orientation,
    state: TurnState,
    history: Vec<PlayedMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard game with Player 1 as White.
    pub fn new() -> Self {
        Self::with_player_one_color(Color::White)
    }

    /// Standard game with Player 1 playing `color`. The board is mirrored
    /// when Player 1 is Black; White always moves first.
    pub fn with_player_one_color(color: Color) -> Self {
        let orientation = Orientation::for_player_one(color);
        let first = match color {
            Color::White => PlayerId::Player1,
            Color::Black => PlayerId::Player2,
        };
        Self::from_board(Board::standard(orientation, color), color, first)
    }

    /// Continue from an arbitrary position with `to_move` on move.
    pub fn from_board(board: Board, player_one: Color, to_move: PlayerId) -> Self {
        let mut game = Game {
            board,
            players: [
                Player {
                    id: PlayerId::Player1,
                    color: player_one,
                    in_check: false,
                },
                Player {
                    id: PlayerId::Player2,
                    color: player_one.opponent(),
                    in_check: false,
                },
            ],
            orientation: Orientation::for_player_one(player_one),
            state: TurnState::AwaitingMove(to_move),
            history: Vec::new(),
        };
        let status = rules::check_status(game.board.grid(), to_move);
        game.players[to_move.index()].in_check = status != CheckStatus::Clear;
        if status == CheckStatus::Checkmate {
            game.state = TurnState::Won(to_move.opponent());
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn turn_state(&self) -> TurnState {
        self.state
    }

    /// The player on move, or the checkmated player once the game is won.
    pub fn current_turn(&self) -> PlayerId {
        match self.state {
            TurnState::AwaitingMove(player) => player,
            TurnState::Won(winner) => winner.opponent(),
        }
    }

    pub fn game_status(&self) -> GameStatus {
        match self.state {
            TurnState::AwaitingMove(_) => GameStatus::Incomplete,
            TurnState::Won(winner) => GameStatus::Won(winner),
        }
    }

    /// Check status of the player on move.
    pub fn check_status(&self) -> CheckStatus {
        rules::check_status(self.board.grid(), self.current_turn())
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Pieces `player` has taken from the opponent.
    pub fn captured_by(&self, player: PlayerId) -> &[Piece] {
        self.board.roster(player.opponent()).lost()
    }

    pub fn square_name(&self, square: Square) -> String {
        self.orientation.name(square)
    }

    /// Move text for `mv` in this game's orientation.
    pub fn describe(&self, mv: Move) -> String {
        let mut text = format!("{} {}", self.square_name(mv.from()), self.square_name(mv.to()));
        if let Some(kind) = mv.promotion() {
            text.push(' ');
            text.push(kind.to_char());
        }
        text
    }

    pub fn board_state(&self) -> BoardState {
        Square::all()
            .map(|sq| {
                (
                    self.square_name(sq),
                    self.board.piece_at(sq).map(|p| p.descriptor()),
                )
            })
            .collect()
    }

    /// Legal moves for the player on move; none once the game is won.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.state {
            TurnState::AwaitingMove(player) => rules::legal_moves(self.board.grid(), player),
            TurnState::Won(_) => Vec::new(),
        }
    }

    pub fn validate_move(&self, text: &str) -> bool {
        self.check_move(text).is_ok()
    }

    /// Validate `text` for the player on move, naming the failed rule.
    ///
    /// Squares in the error are named in this game's orientation.
    pub fn check_move(&self, text: &str) -> Result<Move, MoveError> {
        let TurnState::AwaitingMove(player) = self.state else {
            return Err(MoveError::GameOver);
        };
        let request = MoveRequest::parse(text, self.orientation)?;
        rules::check_move(
            self.board.grid(),
            player,
            request.from,
            request.to,
            request.promotion,
        )
        .map_err(|err| err.in_frame(self.orientation))
    }

    /// Validate and play `text`. On error nothing changes.
    pub fn apply_move(&mut self, text: &str) -> Result<PlayedMove, MoveError> {
        let mv = self.check_move(text).map_err(|err| {
            debug!("rejected '{text}': {err}");
            err
        })?;
        self.commit(mv)
    }

    /// Play a move taken from [`Game::legal_moves`].
    pub fn play(&mut self, mv: Move) -> Result<PlayedMove, MoveError> {
        let TurnState::AwaitingMove(player) = self.state else {
            return Err(MoveError::GameOver);
        };
        let checked = rules::check_move(
            self.board.grid(),
            player,
            mv.from(),
            mv.to(),
            mv.promotion(),
        )
        .map_err(|err| err.in_frame(self.orientation))?;
        if checked != mv {
            return Err(MoveError::IllegalTarget {
                from: mv.from(),
                to: mv.to(),
            }
            .in_frame(self.orientation));
        }
        self.commit(mv)
    }

    fn commit(&mut self, mv: Move) -> Result<PlayedMove, MoveError> {
        let mover = self.current_turn();
        let opponent = mover.opponent();
        let record = self
            .board
            .apply(mv)
            .map_err(|err| MoveError::from(err).in_frame(self.orientation))?;
        debug!("{mover} played {}", self.describe(mv));

        let check = rules::check_status(self.board.grid(), opponent);
        self.players[mover.index()].in_check = false;
        self.players[opponent.index()].in_check = check != CheckStatus::Clear;
        self.state = match check {
            CheckStatus::Checkmate => {
                info!("{opponent} is checkmated, {mover} wins");
                TurnState::Won(mover)
            }
            CheckStatus::Check => {
                info!("{opponent} is in check");
                TurnState::AwaitingMove(opponent)
            }
            CheckStatus::Clear => TurnState::AwaitingMove(opponent),
        };

        let played = PlayedMove {
            record,
            mover,
            check,
        };
        self.history.push(played.clone());
        Ok(played)
    }
}
