//! Translation between algebraic square names and grid indices.
//!
//! Player 1 always occupies grid rows 0-1. When Player 1 plays White the
//! grid frame and the algebraic frame coincide; when Player 1 plays Black the
//! board is mirrored, so `e8` (Black's king square) lands on grid `(3, 0)`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SquareError;
use super::types::{file_to_index, rank_to_index, Color, Square};

/// How algebraic names map onto the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    #[default]
    Standard,
    Mirrored,
}

impl Orientation {
    /// Orientation for a game where Player 1 plays `color`.
    #[must_use]
    pub const fn for_player_one(color: Color) -> Self {
        match color {
            Color::White => Orientation::Standard,
            Color::Black => Orientation::Mirrored,
        }
    }

    /// Read a name such as `e4` into grid `(col, row)`.
    pub fn to_grid(self, text: &str) -> Result<(usize, usize), SquareError> {
        let invalid = || SquareError::InvalidNotation {
            notation: text.to_string(),
        };
        let mut chars = text.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let file = file_to_index(file).ok_or_else(invalid)?;
        let rank = rank_to_index(rank).ok_or_else(invalid)?;
        Ok((self.grid_col(file), self.grid_row(rank)))
    }

    /// Grid square for a name in this orientation.
    pub fn square(self, text: &str) -> Result<Square, SquareError> {
        let (col, row) = self.to_grid(text)?;
        Ok(Square::from_grid(col, row))
    }

    /// Square for grid indices already known to be on the board.
    ///
    /// Grid indices mean the same cell in either orientation, so the result
    /// does not depend on `self`; only names are translated.
    #[must_use]
    pub fn to_square(self, col: usize, row: usize) -> Square {
        Square::from_grid(col, row)
    }

    /// Grid square as this orientation sees it: the square whose standard
    /// name is the name this orientation gives `square`. Its own inverse.
    #[inline]
    #[must_use]
    pub const fn view(self, square: Square) -> Square {
        match self {
            Orientation::Standard => square,
            Orientation::Mirrored => square.mirror(),
        }
    }

    /// Algebraic name of a grid square in this orientation.
    #[must_use]
    pub fn name(self, square: Square) -> String {
        self.view(square).to_string()
    }

    /// Grid column holding algebraic file `file` (0 = a).
    #[inline]
    #[must_use]
    pub const fn grid_col(self, file: usize) -> usize {
        match self {
            Orientation::Standard => file,
            Orientation::Mirrored => 7 - file,
        }
    }

    /// Grid row holding algebraic rank `rank` (0 = rank 1).
    #[inline]
    #[must_use]
    pub const fn grid_row(self, rank: usize) -> usize {
        match self {
            Orientation::Standard => rank,
            Orientation::Mirrored => 7 - rank,
        }
    }
}
