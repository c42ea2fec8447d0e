//! Piece, player and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece kind from a character (p, n, b, r, q, k), any case
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// Relocating one of these marks it as moved.
    #[inline]
    #[must_use]
    pub(crate) const fn tracks_moves(self) -> bool {
        matches!(self, PieceKind::King | PieceKind::Rook | PieceKind::Pawn)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kinds a pawn may become, queen first.
pub const PROMOTION_TARGETS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Prefix used by piece asset keys (`W_King`, `B_Pawn`).
    #[inline]
    #[must_use]
    pub const fn asset_prefix(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// The two seats at the table.
///
/// Player 1 always sits on grid rows 0-1 and pushes pawns towards row 7,
/// whichever color it plays.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::Player1, PlayerId::Player2];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }

    /// 1 or 2, as shown to users.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::Player1 => 1,
            PlayerId::Player2 => 2,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// Pawn forward direction in grid rows (+1 for Player 1, -1 for Player 2)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            PlayerId::Player1 => 1,
            PlayerId::Player2 => -1,
        }
    }

    /// Back row for this player (0 for Player 1, 7 for Player 2)
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 7,
        }
    }

    /// Pawn starting row (1 for Player 1, 6 for Player 2)
    #[inline]
    #[must_use]
    pub const fn pawn_row(self) -> usize {
        match self {
            PlayerId::Player1 => 1,
            PlayerId::Player2 => 6,
        }
    }

    /// Pawn promotion row (7 for Player 1, 0 for Player 2)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            PlayerId::Player1 => 7,
            PlayerId::Player2 => 0,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Stable identity of a piece for roster bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub(crate) u16);

/// One-ply permission for a pawn to capture en passant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnPassant {
    /// Square of the pawn that just advanced two squares.
    pub capture: Square,
    /// Square the capturing pawn lands on.
    pub landing: Square,
}

/// A piece on the board together with its mutable history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) kind: PieceKind,
    pub(crate) owner: PlayerId,
    pub(crate) color: Color,
    pub(crate) location: Square,
    pub(crate) has_moved: bool,
    pub(crate) promoted: bool,
    pub(crate) en_passant: Option<EnPassant>,
}

impl Piece {
    pub(crate) fn new(
        id: PieceId,
        kind: PieceKind,
        owner: PlayerId,
        color: Color,
        location: Square,
    ) -> Self {
        Piece {
            id,
            kind,
            owner,
            color,
            location,
            has_moved: false,
            promoted: false,
            en_passant: None,
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn location(&self) -> Square {
        self.location
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    pub fn promoted(&self) -> bool {
        self.promoted
    }

    #[inline]
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.owner != other.owner
    }

    /// Image key for renderers, e.g. `W_Queen`.
    pub fn asset_key(&self) -> String {
        format!("{}_{}", self.color.asset_prefix(), self.kind.name())
    }

    pub fn descriptor(&self) -> PieceDescriptor {
        PieceDescriptor {
            kind: self.kind,
            owner: self.owner,
            color: self.color,
            asset: self.asset_key(),
        }
    }
}

/// What a renderer needs to draw a piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceDescriptor {
    pub kind: PieceKind,
    pub owner: PlayerId,
    pub color: Color,
    pub asset: String,
}
