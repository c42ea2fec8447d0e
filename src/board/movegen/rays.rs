use super::geometry::Geometry;
use crate::board::grid::Grid;
use crate::board::types::{MoveMap, Piece};

/// Walk each direction until the edge, a friendly piece (excluded) or an
/// enemy piece (included, then stop).
pub(super) fn walk(grid: &Grid, piece: &Piece, geometry: Geometry) -> MoveMap {
    let mut map = MoveMap::new();
    for &(dcol, drow) in geometry.directions {
        let mut path = Vec::with_capacity(geometry.max_steps);
        let mut current = piece.location();
        for _ in 0..geometry.max_steps {
            let Some(next) = current.offset(dcol, drow) else {
                break;
            };
            path.push(next);
            match grid.piece_at(next) {
                None => {
                    map.insert(next, path.clone());
                }
                Some(other) if other.is_enemy_of(piece) => {
                    map.insert(next, path.clone());
                    break;
                }
                Some(_) => break,
            }
            current = next;
        }
    }
    map
}
