//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

pub(crate) fn file_to_index(file: char) -> Option<usize> {
    match file {
        'a'..='h' => Some(file as usize - 'a' as usize),
        _ => None,
    }
}

pub(crate) fn rank_to_index(rank: char) -> Option<usize> {
    match rank {
        '1'..='8' => Some(rank as usize - '1' as usize),
        _ => None,
    }
}

/// A cell of the 8x8 grid, stored as (column, row).
///
/// Column 0 and row 0 are the corner nearest Player 1's queen-side rook in the
/// standard orientation, so `Display` and `FromStr` use the usual `a1`..`h8`
/// names for that frame. Use [`Orientation`](crate::board::Orientation) to
/// translate names when the board is mirrored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub(crate) usize, pub(crate) usize); // (col, row)

impl Square {
    /// All 64 squares, a1 first, h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }

    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Option<Self> {
        if col < 8 && row < 8 {
            Some(Square(col, row))
        } else {
            None
        }
    }

    /// Create a square from grid indices the caller has already bounds-checked.
    #[inline]
    #[must_use]
    pub(crate) fn from_grid(col: usize, row: usize) -> Self {
        debug_assert!(col < 8 && row < 8, "grid index ({col}, {row}) off board");
        Square(col, row)
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.1
    }

    /// Step by a (col, row) delta, `None` when the result leaves the grid.
    #[inline]
    #[must_use]
    pub fn offset(self, dcol: isize, drow: isize) -> Option<Self> {
        let col = self.0 as isize + dcol;
        let row = self.1 as isize + drow;
        if (0..8).contains(&col) && (0..8).contains(&row) {
            Some(Square(col as usize, row as usize))
        } else {
            None
        }
    }

    /// Reflect through the board centre (a1 <-> h8).
    #[inline]
    #[must_use]
    pub const fn mirror(self) -> Self {
        Square(7 - self.0, 7 - self.1)
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.1 * 8 + self.0
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Square(idx % 8, idx / 8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.0 as u8 + b'a') as char, self.1 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((col, row): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(col, row).ok_or(SquareError::OutOfBounds { col, row })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let col = file_to_index(file).ok_or_else(invalid)?;
        let row = rank_to_index(rank).ok_or_else(invalid)?;
        Ok(Square(col, row))
    }
}
