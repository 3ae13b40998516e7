//! Game rules for Pente
//!
//! This module implements the rule set:
//! - Run counting and the line scoring formula
//! - Capture rules (flanked pair)
//! - Opening restrictions for White

pub mod capture;
pub mod lines;
pub mod opening;

// Re-exports for convenient access
pub use capture::{capture_directions, count_captures, execute_captures};
pub use lines::{
    count_empty_run, count_run, fold_line_points, has_five, line_length, line_lengths, score_at,
    score_position,
};
pub use opening::check_opening;

/// Single-move score that wins the round.
pub const WINNING_SCORE: i32 = 5;
/// Captured pairs that win the round.
pub const WINNING_CAPTURES: u32 = 5;
