//! Attack resolution and game termination.

use rand::Rng;

use crate::board::Board;
use crate::common::AttackOutcome;
use crate::fleet::Fleet;

/// Resolve one attack at `coordinate` = (column, row).
///
/// An occupied cell is cleared, the ship's remaining-length counter is
/// decremented and the attack reports a hit. Empty cells and off-board
/// coordinates are misses, never errors; repeat attacks on a cleared cell
/// stay misses with no further mutation.
pub fn attack(coordinate: (usize, usize), board: &mut Board, fleet: &mut Fleet) -> AttackOutcome {
    let (col, row) = coordinate;
    if !board.in_bounds(row, col) {
        return AttackOutcome::Miss;
    }
    match board.take(row, col) {
        Some(name) => {
            if fleet.record_hit(&name).is_none() {
                log::warn!("hit ship {:?} missing from fleet catalog", name);
            }
            AttackOutcome::Hit
        }
        None => AttackOutcome::Miss,
    }
}

/// `true` once every cell on the board is empty.
pub fn is_game_over(board: &Board) -> bool {
    board.is_cleared()
}

/// Uniformly random attack coordinate (column, row) for a `size`×`size`
/// board. This is the whole of the bot's strategy.
pub fn random_attack<R: Rng>(rng: &mut R, size: usize) -> (usize, usize) {
    (rng.random_range(0..size), rng.random_range(0..size))
}
