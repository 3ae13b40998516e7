//! Run counting and the line scoring formula
//!
//! All counts are taken from a candidate cell: the walk starts at the
//! neighbour in the given direction, so the candidate itself is never
//! counted and opposite directions never overlap.

use crate::board::{Axis, Board, Direction, Pos, Stone, BOARD_SIZE};

/// No run can be longer than the board minus the origin cell.
const MAX_RUN: u8 = BOARD_SIZE as u8 - 1;

/// Consecutive `stone` pieces starting one step from `pos` along `dir`.
///
/// Stops at the board edge, an empty cell or the other colour.
pub fn count_run(board: &Board, pos: Pos, dir: Direction, stone: Stone) -> u8 {
    count_while(pos, dir, |p| board.get(p) == stone && stone.is_colour())
}

/// Consecutive empty cells starting one step from `pos` along `dir`.
pub fn count_empty_run(board: &Board, pos: Pos, dir: Direction) -> u8 {
    count_while(pos, dir, |p| board.is_empty(p))
}

#[inline]
fn count_while(pos: Pos, dir: Direction, mut accept: impl FnMut(Pos) -> bool) -> u8 {
    let mut count = 0;
    while count < MAX_RUN {
        match pos.at_distance(count as i32 + 1, dir) {
            Some(next) if accept(next) => count += 1,
            _ => break,
        }
    }
    count
}

/// Length of the line through `pos` along `axis` if `stone` were placed
/// there: both runs plus the piece itself.
#[inline]
pub fn line_length(board: &Board, pos: Pos, stone: Stone, axis: Axis) -> u8 {
    let (a, b) = axis.directions();
    count_run(board, pos, a, stone) + count_run(board, pos, b, stone) + 1
}

/// Line lengths in scoring order (right diagonal, left diagonal,
/// horizontal, vertical).
pub fn line_lengths(board: &Board, pos: Pos, stone: Stone) -> [u8; 4] {
    Axis::ALL.map(|axis| line_length(board, pos, stone, axis))
}

/// Fold one line length into the running point total.
///
/// A line of exactly 4 adds one point and a multiple of 5 adds its length.
/// Any other length above 4 replaces the running total with
/// `(len / 5) * 5 + (len % 5) / 4` instead of adding to it.
#[inline]
pub fn fold_line_points(total: i32, len: u8) -> i32 {
    let len = len as i32;
    match len {
        0..=3 => total,
        4 => total + 1,
        _ if len % 5 == 0 => total + len,
        _ => (len / 5) * 5 + (len % 5) / 4,
    }
}

/// Points `stone` would earn by playing `pos`. A result of 5 or more wins.
pub fn score_at(board: &Board, pos: Pos, stone: Stone) -> i32 {
    line_lengths(board, pos, stone)
        .into_iter()
        .fold(0, fold_line_points)
}

/// Round points of a restored position: every occupied cell is scored for
/// `stone` in row-major order and lifted off a scratch copy before the next
/// one is looked at, so each line is counted once.
pub fn score_position(board: &Board, stone: Stone) -> i32 {
    let mut scratch = board.clone();
    let mut total = 0;
    for pos in Pos::all() {
        if scratch.is_empty(pos) {
            continue;
        }
        total += score_at(&scratch, pos, stone);
        let removed = scratch.remove_piece(pos);
        debug_assert!(removed.is_ok(), "{pos} was occupied");
    }
    total
}

/// Whether some line of five or more `stone` pieces already stands on the
/// board. Any such line is worth at least [`WINNING_SCORE`] points.
///
/// [`WINNING_SCORE`]: super::WINNING_SCORE
pub fn has_five(board: &Board, stone: Stone) -> bool {
    board
        .pieces(stone)
        .any(|pos| line_lengths(board, pos, stone).into_iter().any(|len| len >= 5))
}
