//! Error and result definitions

use crate::board::Pos;

pub type MoveOutcome<T> = Result<T, MoveError>;

/// Why a move or board edit was rejected. Every kind is recoverable: the
/// turn stays with the same player.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("({row}, {col}) is not on the board.")]
    OutOfBounds { row: i32, col: i32 },
    #[error("{0} is already occupied.")]
    OccupiedCell(Pos),
    #[error("Only White or Black pieces can be placed.")]
    InvalidColour,
    #[error("The first move must be in the center of the board (J10), not {0}.")]
    IllegalFirstMove(Pos),
    #[error("The second move must be three intersections away from the center, not {0}.")]
    IllegalSecondMove(Pos),
    #[error("{0} is empty, there is no piece to remove.")]
    EmptyCellExpected(Pos),
    #[error("It is not this player's turn.")]
    NotYourTurn,
    #[error("The round is over.")]
    RoundOver,
    #[error("The round is still in progress.")]
    RoundInProgress,
}

/// Saved-game fields that cannot be turned back into a match.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Expected 19 board rows, found {0}.")]
    RowCount(usize),
    #[error("Board row {row} has {len} cells, expected 19.")]
    RowLength { row: usize, len: usize },
    #[error("Unknown piece '{found}' at row {row}, column {col}.")]
    InvalidCell { row: usize, col: usize, found: char },
    #[error("The next player must be White or Black.")]
    InvalidColour,
    #[error("Saved game is missing the {0} line.")]
    MissingField(&'static str),
    #[error("Expected a number for {field}, found '{found}'.")]
    InvalidNumber { field: &'static str, found: String },
    #[error("Unrecognised next player '{0}'.")]
    InvalidNextPlayer(String),
}

/// Saving or loading a game file.
#[derive(thiserror::Error, Debug)]
pub enum GameFileError {
    #[error("Could not access the saved game: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("Wait for the computer to finish its move.")]
    Busy,
}
