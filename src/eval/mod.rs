//! Board scans behind the move cascade
//!
//! - [`heuristic`]: best scoring cell, best capture cell, first developing line
//! - [`initiative`]: gap filling and extension from anchor pieces

pub mod heuristic;
pub mod initiative;

pub use heuristic::{best_capture_cell, best_scoring_cell, first_developing_line, ScoredCell};
pub use initiative::{first_initiative_extension, first_initiative_fill};
