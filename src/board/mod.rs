//! Board representation for Pente

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, SECOND_MOVE_EXCLUSION};

/// Board size (19x19)
pub const BOARD_SIZE: usize = 19;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 361

/// Center intersection (J10)
pub const CENTER: Pos = Pos { row: 9, col: 9 };

/// Cell states. `Empty` doubles as "no colour".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_colour(self) -> bool {
        self != Stone::Empty
    }

    /// Character used by saved games: `O`, `W` or `B`
    pub fn to_char(self) -> char {
        match self {
            Stone::Empty => 'O',
            Stone::White => 'W',
            Stone::Black => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Stone> {
        match c {
            'O' => Some(Stone::Empty),
            'W' => Some(Stone::White),
            'B' => Some(Stone::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stone::Empty => "Empty",
            Stone::White => "White",
            Stone::Black => "Black",
        };
        f.write_str(name)
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Bounds-checked constructor for externally supplied coordinates
    pub fn try_new(row: i32, col: i32) -> Result<Self, MoveError> {
        if Self::is_valid(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(MoveError::OutOfBounds { row, col })
        }
    }

    /// False for a `Pos` built directly from out-of-range fields
    #[inline]
    pub fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Project `distance` steps along `dir`; `None` once either coordinate
    /// leaves the board.
    #[inline]
    pub fn at_distance(self, distance: i32, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let r = self.row as i32 + dr * distance;
        let c = self.col as i32 + dc * distance;
        if Self::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// All 361 positions in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// Board label: column letter then row number counted from the bottom (`J10`)
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col) as char;
        write!(f, "{}{}", col, BOARD_SIZE - self.row as usize)
    }
}

/// The eight unit steps used for run counting and capture probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    RightDiagUp,
    RightDiagDown,
    LeftDiagUp,
    LeftDiagDown,
    HorizontalRight,
    HorizontalLeft,
    VerticalUp,
    VerticalDown,
}

impl Direction {
    /// Probe order shared by capture detection and initiative scans
    pub const ALL: [Direction; 8] = [
        Direction::RightDiagUp,
        Direction::RightDiagDown,
        Direction::LeftDiagUp,
        Direction::LeftDiagDown,
        Direction::HorizontalRight,
        Direction::HorizontalLeft,
        Direction::VerticalUp,
        Direction::VerticalDown,
    ];

    /// (row step, column step)
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::RightDiagUp => (-1, 1),
            Direction::RightDiagDown => (1, -1),
            Direction::LeftDiagUp => (-1, -1),
            Direction::LeftDiagDown => (1, 1),
            Direction::HorizontalRight => (0, 1),
            Direction::HorizontalLeft => (0, -1),
            Direction::VerticalUp => (-1, 0),
            Direction::VerticalDown => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::RightDiagUp => Direction::RightDiagDown,
            Direction::RightDiagDown => Direction::RightDiagUp,
            Direction::LeftDiagUp => Direction::LeftDiagDown,
            Direction::LeftDiagDown => Direction::LeftDiagUp,
            Direction::HorizontalRight => Direction::HorizontalLeft,
            Direction::HorizontalLeft => Direction::HorizontalRight,
            Direction::VerticalUp => Direction::VerticalDown,
            Direction::VerticalDown => Direction::VerticalUp,
        }
    }
}

/// A line through a cell: a pair of opposite directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    RightDiagonal,
    LeftDiagonal,
    Horizontal,
    Vertical,
}

impl Axis {
    /// Scoring order
    pub const ALL: [Axis; 4] = [
        Axis::RightDiagonal,
        Axis::LeftDiagonal,
        Axis::Horizontal,
        Axis::Vertical,
    ];

    pub fn directions(self) -> (Direction, Direction) {
        match self {
            Axis::RightDiagonal => (Direction::RightDiagUp, Direction::RightDiagDown),
            Axis::LeftDiagonal => (Direction::LeftDiagUp, Direction::LeftDiagDown),
            Axis::Horizontal => (Direction::HorizontalLeft, Direction::HorizontalRight),
            Axis::Vertical => (Direction::VerticalUp, Direction::VerticalDown),
        }
    }
}
