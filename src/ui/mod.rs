//! GUI module for the Pente game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::PenteApp;
pub use game_state::{read_snapshot, write_snapshot, GameState, SAVE_FILE};
