//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece geometry and blocking
//! - `rules.rs` - Check, checkmate, self-check and special moves
//! - `edge_cases.rs` - Mirrored boards, rosters and unusual positions
//! - `proptest.rs` - Property-based tests

mod edge_cases;

use crate::board::Square;

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

pub(super) fn squares(names: &[&str]) -> Vec<Square> {
    names.iter().map(|name| sq(name)).collect()
}
