//! Board structure enforcing placement and removal legality

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, CENTER, TOTAL_CELLS};
use crate::error::MoveError;

/// Half-width of the square around the center that a second White move may
/// not enter (rows and columns 6..=12).
pub const SECOND_MOVE_EXCLUSION: u8 = 3;

/// 19x19 grid of cells, stored as one bitboard per colour.
///
/// A cell is Empty exactly when neither bitboard holds it, so every cell is
/// always in one of the three valid states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.contains(pos) {
            Stone::Black
        } else if self.white.contains(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.contains(pos) && !self.white.contains(pos)
    }

    /// Place a piece on an empty cell. Captures are not processed here.
    pub fn place_piece(&mut self, pos: Pos, stone: Stone) -> Result<(), MoveError> {
        Self::check_bounds(pos)?;
        if !stone.is_colour() {
            return Err(MoveError::InvalidColour);
        }
        if !self.is_empty(pos) {
            return Err(MoveError::OccupiedCell(pos));
        }
        match stone {
            Stone::Black => self.black.insert(pos),
            Stone::White => self.white.insert(pos),
            Stone::Empty => {}
        }
        Ok(())
    }

    /// Reset a cell to Empty, returning what was there.
    pub fn remove_piece(&mut self, pos: Pos) -> Result<Stone, MoveError> {
        Self::check_bounds(pos)?;
        let stone = self.get(pos);
        match stone {
            Stone::Black => self.black.remove(pos),
            Stone::White => self.white.remove(pos),
            Stone::Empty => return Err(MoveError::EmptyCellExpected(pos)),
        }
        Ok(stone)
    }

    /// White's second move must be empty and outside the 7x7 block around
    /// the center.
    pub fn is_second_move_legal(&self, pos: Pos) -> bool {
        pos.in_bounds() && self.is_empty(pos) && !Self::in_center_block(pos)
    }

    fn check_bounds(pos: Pos) -> Result<(), MoveError> {
        if pos.in_bounds() {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                row: pos.row as i32,
                col: pos.col as i32,
            })
        }
    }

    #[inline]
    pub fn in_center_block(pos: Pos) -> bool {
        let lo = CENTER.row - SECOND_MOVE_EXCLUSION;
        let hi = CENTER.row + SECOND_MOVE_EXCLUSION;
        (lo..=hi).contains(&pos.row) && (lo..=hi).contains(&pos.col)
    }

    /// Number of cells holding `stone` (Empty counts free cells)
    pub fn count(&self, stone: Stone) -> usize {
        match stone {
            Stone::Black => self.black.len(),
            Stone::White => self.white.len(),
            Stone::Empty => TOTAL_CELLS - self.black.len() - self.white.len(),
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count(Stone::Empty) == 0
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    pub fn reset(&mut self) {
        self.black.clear();
        self.white.clear();
    }

    /// Positions of one colour, row-major (empty iterator for `Empty`)
    pub fn pieces(&self, stone: Stone) -> impl Iterator<Item = Pos> {
        let bits = match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
            Stone::Empty => Bitboard::new(),
        };
        bits.iter()
    }

    /// Empty cells, row-major
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_empty(pos))
    }

    /// Rows of `O`/`W`/`B` characters
    pub fn to_rows(&self) -> Vec<String> {
        (0..BOARD_SIZE as u8)
            .map(|row| {
                (0..BOARD_SIZE as u8)
                    .map(|col| self.get(Pos::new(row, col)).to_char())
                    .collect()
            })
            .collect()
    }
}
