use crate::board::grid::Grid;
use crate::board::types::{MoveMap, Piece};

/// Pawn moves: straight ahead onto empty squares (two on the first move),
/// diagonally ahead only onto an enemy or the stored en-passant landing.
pub(super) fn pawn_moves(grid: &Grid, pawn: &Piece) -> MoveMap {
    let mut map = MoveMap::new();
    let forward = pawn.owner().forward();

    let steps = if pawn.has_moved() { 1 } else { 2 };
    let mut path = Vec::with_capacity(steps);
    let mut current = pawn.location();
    for _ in 0..steps {
        let Some(next) = current.offset(0, forward) else {
            break;
        };
        if !grid.is_empty(next) {
            break;
        }
        path.push(next);
        map.insert(next, path.clone());
        current = next;
    }

    for dcol in [-1, 1] {
        let Some(target) = pawn.location().offset(dcol, forward) else {
            continue;
        };
        let enemy = grid
            .piece_at(target)
            .is_some_and(|other| other.is_enemy_of(pawn));
        let landing = pawn
            .en_passant()
            .is_some_and(|ep| ep.landing == target && grid.is_empty(target));
        if enemy || landing {
            map.insert(target, vec![target]);
        }
    }

    map
}
