//! Board-wide scans used by the move cascade
//!
//! Every scan walks the empty cells in row-major order. The "best" scans keep
//! the first cell whose value is strictly greater than everything seen
//! before, so ties go to the earliest cell. The "first" scans return on the
//! first qualifying cell without looking further.

use crate::board::{Board, Pos, Stone};
use crate::rules::{count_captures, line_lengths, score_at};

/// Line length a developing line must exceed.
pub const DEVELOPING_LINE: u8 = 2;

/// A cell together with the value that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCell {
    pub pos: Pos,
    pub value: i32,
}

/// Keep the first strictly-greater value, starting from zero.
fn best_by(board: &Board, mut value_of: impl FnMut(Pos) -> i32) -> Option<ScoredCell> {
    let mut best: Option<ScoredCell> = None;
    for pos in board.empty_cells() {
        let value = value_of(pos);
        if value > best.map_or(0, |b| b.value) {
            best = Some(ScoredCell { pos, value });
        }
    }
    best
}

/// Empty cell where `stone` scores the most points. `None` when no cell
/// scores at all.
#[must_use]
pub fn best_scoring_cell(board: &Board, stone: Stone) -> Option<ScoredCell> {
    best_by(board, |pos| score_at(board, pos, stone))
}

/// Empty cell where `stone` captures the most pairs. `None` when no
/// capture is available.
#[must_use]
pub fn best_capture_cell(board: &Board, stone: Stone) -> Option<ScoredCell> {
    best_by(board, |pos| count_captures(board, pos, stone) as i32)
}

/// First empty cell where placing `stone` makes a line longer than two on
/// any axis. The value is that line's length.
#[must_use]
pub fn first_developing_line(board: &Board, stone: Stone) -> Option<ScoredCell> {
    board.empty_cells().find_map(|pos| {
        line_lengths(board, pos, stone)
            .into_iter()
            .find(|&len| len > DEVELOPING_LINE)
            .map(|len| ScoredCell {
                pos,
                value: len as i32,
            })
    })
}
