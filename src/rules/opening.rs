//! Opening restrictions for White
//!
//! White always opens: its first piece goes on the center and its second
//! piece must stay outside the 7x7 block around the center. The same checks
//! apply to human-entered and computer-chosen moves.

use crate::board::{Board, Pos, Stone, CENTER};
use crate::error::MoveError;

/// Validate `pos` as the next move of a player of colour `stone` who has
/// already made `moves_made` moves this round.
pub fn check_opening(board: &Board, pos: Pos, stone: Stone, moves_made: u32) -> Result<(), MoveError> {
    if stone != Stone::White {
        return Ok(());
    }
    match moves_made {
        0 if pos != CENTER => Err(MoveError::IllegalFirstMove(pos)),
        // An occupied cell is reported by placement instead
        1 if board.is_empty(pos) && !board.is_second_move_legal(pos) => {
            Err(MoveError::IllegalSecondMove(pos))
        }
        _ => Ok(()),
    }
}
