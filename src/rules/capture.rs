//! Flanking pair capture
//!
//! Capture pattern: X-O-O-X where X is the capturing player's piece and O
//! the opponent's. Exactly two opponent pieces must sit between the played
//! cell and the friendly piece three steps away.

use tracing::trace;

use super::lines::count_run;
use crate::board::{Board, Direction, Pos, Stone};
use crate::error::MoveError;

/// Directions in which playing `stone` at `pos` flanks an opponent pair.
///
/// Works for a candidate empty cell as well as for a cell that was just
/// played, since probing starts one step away.
pub fn capture_directions(board: &Board, pos: Pos, stone: Stone) -> Vec<Direction> {
    let opponent = stone.opponent();
    if !opponent.is_colour() {
        return Vec::new();
    }
    Direction::ALL
        .into_iter()
        .filter(|&dir| {
            count_run(board, pos, dir, opponent) == 2
                && pos
                    .at_distance(3, dir)
                    .is_some_and(|far| board.get(far) == stone)
        })
        .collect()
}

/// Number of pairs `stone` would capture by playing `pos`.
#[inline]
pub fn count_captures(board: &Board, pos: Pos, stone: Stone) -> u32 {
    capture_directions(board, pos, stone).len() as u32
}

/// Remove every pair flanked by the piece just played at `pos`.
///
/// Returns the removed positions, two per captured pair.
pub fn execute_captures(board: &mut Board, pos: Pos, stone: Stone) -> Result<Vec<Pos>, MoveError> {
    let mut captured = Vec::new();
    for dir in capture_directions(board, pos, stone) {
        for distance in 1..=2 {
            // capture_directions only yields directions with both cells in bounds
            let Some(target) = pos.at_distance(distance, dir) else {
                continue;
            };
            board.remove_piece(target)?;
            captured.push(target);
        }
        trace!(%pos, ?dir, "pair captured");
    }
    Ok(captured)
}
