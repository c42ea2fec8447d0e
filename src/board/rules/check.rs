//! Check and checkmate detection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{expand, leaves_king_in_check, validated_path};
use crate::board::grid::Grid;
use crate::board::movegen;
use crate::board::types::{Move, Piece, PieceKind, PlayerId, Square};

/// King-safety verdict for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckStatus {
    Clear,
    Check,
    Checkmate,
}

/// An enemy piece that attacks the king, with the line it attacks along.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checker {
    pub square: Square,
    pub kind: PieceKind,
    /// Squares from the checker to the king, king square last.
    pub path: Vec<Square>,
}

impl Checker {
    /// Squares a defender could step onto to cut the line.
    pub fn interposing(&self) -> &[Square] {
        self.path.split_last().map_or(&[][..], |(_, before)| before)
    }

    fn captured_by(&self, piece: &Piece, to: Square) -> bool {
        to == self.square
            || piece
                .en_passant()
                .is_some_and(|ep| ep.landing == to && ep.capture == self.square)
    }
}

/// A legal reply to check, by the way it resolves the check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Escape {
    KingMove(Move),
    KingCapture(Move),
    Block(Move),
    Capture(Move),
}

impl Escape {
    #[must_use]
    pub fn mv(&self) -> Move {
        match *self {
            Escape::KingMove(mv)
            | Escape::KingCapture(mv)
            | Escape::Block(mv)
            | Escape::Capture(mv) => mv,
        }
    }
}

/// Every enemy piece whose validated path reaches `defender`'s king.
#[must_use]
pub fn checkers(grid: &Grid, defender: PlayerId) -> Vec<Checker> {
    let Some(king) = grid.king_square(defender) else {
        return Vec::new();
    };
    grid.pieces_of(defender.opponent())
        .filter_map(|attacker| {
            validated_path(grid, &attacker, king).map(|path| Checker {
                square: attacker.location(),
                kind: attacker.kind(),
                path,
            })
        })
        .collect()
}

#[must_use]
pub fn is_in_check(grid: &Grid, defender: PlayerId) -> bool {
    let Some(king) = grid.king_square(defender) else {
        return false;
    };
    grid.pieces_of(defender.opponent())
        .any(|attacker| validated_path(grid, &attacker, king).is_some())
}

/// Every legal way out of check for `defender`; empty when not in check.
///
/// Candidates are king moves, captures of a checker and interpositions on a
/// checker's line. Each is played on a scratch grid, so with two checkers a
/// reply that deals with only one of them is discarded.
#[must_use]
pub fn escapes(grid: &Grid, defender: PlayerId) -> Vec<Escape> {
    let checkers = checkers(grid, defender);
    if checkers.is_empty() {
        return Vec::new();
    }

    let mut found = Vec::new();
    for piece in grid.pieces_of(defender) {
        let is_king = piece.kind() == PieceKind::King;
        for to in movegen::reachable(grid, &piece).into_keys() {
            let captures = checkers.iter().any(|c| c.captured_by(&piece, to));
            let escape: fn(Move) -> Escape = if is_king && captures {
                Escape::KingCapture
            } else if is_king {
                Escape::KingMove
            } else if captures {
                Escape::Capture
            } else if checkers.iter().any(|c| c.interposing().contains(&to)) {
                Escape::Block
            } else {
                continue;
            };
            found.extend(
                expand(grid, &piece, to)
                    .into_iter()
                    .filter(|mv| !leaves_king_in_check(grid, defender, *mv))
                    .map(escape),
            );
        }
    }
    found
}

#[must_use]
pub fn check_status(grid: &Grid, defender: PlayerId) -> CheckStatus {
    if !is_in_check(grid, defender) {
        CheckStatus::Clear
    } else if escapes(grid, defender).is_empty() {
        CheckStatus::Checkmate
    } else {
        CheckStatus::Check
    }
}
