//! Pente rule engine and computer opponent
//!
//! A Pente implementation for one human against the computer:
//! - Standard 19x19 board, White always opens on the center (J10)
//! - White's second move must stay outside the 7x7 center block
//! - Lines of four score a point, five in a row wins the round
//! - Pair capture rule: X-O-O-X pattern captures the O-O pair,
//!   five captured pairs win the round
//! - Rounds accumulate into a tournament score
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Run counting, scoring, captures, opening restrictions
//! - [`eval`]: Board-wide scans used to pick moves
//! - [`engine`]: The computer's rule cascade
//! - [`game`]: Players, the turn state machine, saved games
//! - [`random`]: Substitutable randomness
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use pente::game::{MatchConfig, PlayerKind, TurnController};
//! use pente::{Pos, Stone};
//!
//! let config = MatchConfig { human_colour: Some(Stone::White), seed: Some(1) };
//! let mut game = TurnController::new(config);
//!
//! // White opens on the center
//! let report = game.play_human(Pos::new(9, 9)).unwrap();
//! assert_eq!(report.points, 0);
//!
//! // The computer answers as Black
//! let (decision, _) = game.play_computer().unwrap();
//! println!("{decision}");
//! assert_eq!(game.active_kind(), PlayerKind::Human);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod random;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, CENTER};
pub use engine::{MoveReason, MoveResult, Strategy};
pub use error::{MoveError, MoveOutcome, SnapshotError};
pub use game::{MatchConfig, TurnController};
