//! Initiative: open space around an anchor piece
//!
//! An anchor is any piece of the scanned colour. From it the eight empty
//! runs are measured; a run of exactly two that ends on a friendly piece is
//! a gap worth filling, and a run of three or more is room to extend.

use crate::board::{Board, Direction, Pos, Stone};
use crate::rules::count_empty_run;

/// Empty run needed before extending from an anchor.
pub const INITIATIVE_RUN: u8 = 3;

/// Gap next to `anchor` that closes an `anchor _ _ friend` pattern.
///
/// Directions are tried in `Direction::ALL` order; the cell one step from the anchor
/// is returned.
pub fn fill_from_anchor(board: &Board, anchor: Pos, stone: Stone) -> Option<Pos> {
    Direction::ALL.into_iter().find_map(|dir| {
        if count_empty_run(board, anchor, dir) != 2 {
            return None;
        }
        let far = anchor.at_distance(3, dir)?;
        if board.get(far) != stone {
            return None;
        }
        anchor.at_distance(1, dir).filter(|&near| board.is_empty(near))
    })
}

/// Cell three steps out along the longest empty run from `anchor`, if that
/// run is at least three long. Ties keep the earlier direction.
pub fn extend_from_anchor(board: &Board, anchor: Pos) -> Option<Pos> {
    let mut best: Option<(Direction, u8)> = None;
    for dir in Direction::ALL {
        let run = count_empty_run(board, anchor, dir);
        if run > best.map_or(0, |(_, r)| r) {
            best = Some((dir, run));
        }
    }
    match best {
        Some((dir, run)) if run >= INITIATIVE_RUN => anchor.at_distance(3, dir),
        _ => None,
    }
}

/// First anchor of `stone` (row-major) with a gap to fill.
#[must_use]
pub fn first_initiative_fill(board: &Board, stone: Stone) -> Option<Pos> {
    board
        .pieces(stone)
        .find_map(|anchor| fill_from_anchor(board, anchor, stone))
}

/// First anchor of `stone` (row-major) with room to extend.
#[must_use]
pub fn first_initiative_extension(board: &Board, stone: Stone) -> Option<Pos> {
    board
        .pieces(stone)
        .find_map(|anchor| extend_from_anchor(board, anchor))
}
