//! Error types for board and rules operations.

use std::fmt;

use super::coords::Orientation;
use super::types::Square;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Text is not a file a-h followed by a rank 1-8
    InvalidNotation { notation: String },
    /// Grid indices outside 0-7
    OutOfBounds { col: usize, row: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
            SquareError::OutOfBounds { col, row } => {
                write!(f, "Grid index ({col}, {row}) out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for direct board mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No piece on the source square
    EmptySource { square: Square },
    /// Relocation target already holds a piece
    OccupiedTarget { square: Square },
    /// Capture requested on an empty square
    NoPieceToCapture { square: Square },
    /// Promotion requested for something other than a pawn
    NotPromotable { square: Square },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EmptySource { square } => write!(f, "No piece on {square}"),
            BoardError::OccupiedTarget { square } => {
                write!(f, "Square {square} is already occupied")
            }
            BoardError::NoPieceToCapture { square } => {
                write!(f, "No piece to capture on {square}")
            }
            BoardError::NotPromotable { square } => {
                write!(f, "Piece on {square} is not a pawn")
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl BoardError {
    /// The same error with its square named in `orientation`'s frame.
    #[must_use]
    pub fn in_frame(self, orientation: Orientation) -> Self {
        match self {
            BoardError::EmptySource { square } => BoardError::EmptySource {
                square: orientation.view(square),
            },
            BoardError::OccupiedTarget { square } => BoardError::OccupiedTarget {
                square: orientation.view(square),
            },
            BoardError::NoPieceToCapture { square } => BoardError::NoPieceToCapture {
                square: orientation.view(square),
            },
            BoardError::NotPromotable { square } => BoardError::NotPromotable {
                square: orientation.view(square),
            },
        }
    }
}

/// Which castling precondition failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleBlock {
    KingMoved,
    NoRook,
    RookMoved,
    PathBlocked,
    KingInCheck,
    PassesThroughCheck,
    DestinationAttacked,
}

impl fmt::Display for CastleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CastleBlock::KingMoved => "the king has already moved",
            CastleBlock::NoRook => "there is no rook to castle with",
            CastleBlock::RookMoved => "the rook has already moved",
            CastleBlock::PathBlocked => "pieces stand between king and rook",
            CastleBlock::KingInCheck => "the king is in check",
            CastleBlock::PassesThroughCheck => "the king would pass through an attacked square",
            CastleBlock::DestinationAttacked => "the king would land on an attacked square",
        };
        f.write_str(text)
    }
}

/// Error type for rejected move requests.
///
/// Every variant is recoverable: the game is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move text is not `<from> <to>` with an optional promotion letter
    MalformedMove { text: String },
    /// One of the squares could not be read
    InvalidSquare(SquareError),
    /// Promotion letter is not q, r, b or n
    InvalidPromotion { found: char },
    /// No piece on the origin square
    EmptySource { square: Square },
    /// The piece belongs to the player who is not on move
    NotOwner { square: Square },
    /// Target is outside the piece's moves, blocked, or friendly
    IllegalTarget { from: Square, to: Square },
    /// Move would leave the mover's own king in check
    SelfCheck { from: Square, to: Square },
    /// A castling precondition failed
    CastleUnavailable { reason: CastleBlock },
    /// The board refused to carry out a move the rules had accepted
    Board(BoardError),
    /// The game already has a winner
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::MalformedMove { text } => {
                write!(f, "Malformed move '{text}', expected '<from> <to>'")
            }
            MoveError::InvalidSquare(err) => write!(f, "{err}"),
            MoveError::InvalidPromotion { found } => {
                write!(f, "Invalid promotion piece '{found}'")
            }
            MoveError::EmptySource { square } => write!(f, "No piece on {square}"),
            MoveError::NotOwner { square } => {
                write!(f, "Piece on {square} belongs to the other player")
            }
            MoveError::IllegalTarget { from, to } => {
                write!(f, "Piece on {from} cannot move to {to}")
            }
            MoveError::SelfCheck { from, to } => {
                write!(f, "Moving {from} to {to} would leave the king in check")
            }
            MoveError::CastleUnavailable { reason } => {
                write!(f, "Cannot castle: {reason}")
            }
            MoveError::Board(err) => write!(f, "Board rejected the move: {err}"),
            MoveError::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidSquare(err) => Some(err),
            MoveError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        MoveError::InvalidSquare(err)
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}

impl MoveError {
    /// The same error with every square named in `orientation`'s frame,
    /// so a mirrored game reports the squares its player typed.
    #[must_use]
    pub fn in_frame(self, orientation: Orientation) -> Self {
        let view = |sq| orientation.view(sq);
        match self {
            MoveError::EmptySource { square } => MoveError::EmptySource {
                square: view(square),
            },
            MoveError::NotOwner { square } => MoveError::NotOwner {
                square: view(square),
            },
            MoveError::IllegalTarget { from, to } => MoveError::IllegalTarget {
                from: view(from),
                to: view(to),
            },
            MoveError::SelfCheck { from, to } => MoveError::SelfCheck {
                from: view(from),
                to: view(to),
            },
            MoveError::Board(err) => MoveError::Board(err.in_frame(orientation)),
            other => other,
        }
    }
}
