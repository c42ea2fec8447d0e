//! Per-piece move generation.
//!
//! Produces, for one piece, every square it can reach given what stands on
//! the grid, keyed to the path walked to get there. The map is pseudo-legal:
//! king safety and castling belong to the rules engine.

mod geometry;
mod pawns;
mod rays;

use geometry::Geometry;

use super::grid::Grid;
use super::types::{Color, MoveMap, Piece, PieceId, PieceKind, PlayerId, Square};

/// Squares the piece can reach, each mapped to its path (target last).
#[must_use]
pub fn reachable(grid: &Grid, piece: &Piece) -> MoveMap {
    match Geometry::of(piece.kind()) {
        Some(geometry) => rays::walk(grid, piece, geometry),
        None => pawns::pawn_moves(grid, piece),
    }
}

/// The move map of a lone piece on an otherwise empty board.
#[must_use]
pub fn geometry_map(kind: PieceKind, owner: PlayerId, has_moved: bool, from: Square) -> MoveMap {
    let mut piece = Piece::new(PieceId(0), kind, owner, Color::White, from);
    piece.has_moved = has_moved;
    let mut grid = Grid::empty();
    grid.place(from, piece);
    reachable(&grid, &piece)
}
