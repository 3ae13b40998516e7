//! Match flow: players, the turn state machine and saved games

pub mod controller;
pub mod events;
pub mod player;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests;

use tracing::warn;

use crate::board::Stone;

// Re-exports
pub use controller::{TournamentResult, TurnController};
pub use events::{GameEvent, TurnReport};
pub use player::{Player, PlayerKind};
pub use snapshot::Snapshot;
pub use state::{MatchState, Phase};

/// Environment variable holding the RNG seed
pub const SEED_VAR: &str = "PENTE_SEED";
/// Environment variable forcing the human's first-round colour
pub const HUMAN_COLOUR_VAR: &str = "PENTE_HUMAN";

/// Match setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchConfig {
    /// Human's colour in the first round; coin toss when `None`
    pub human_colour: Option<Stone>,
    /// Seed for reproducible games; entropy when `None`
    pub seed: Option<u64>,
}

impl MatchConfig {
    /// Read [`SEED_VAR`] and [`HUMAN_COLOUR_VAR`]. Unparseable values are
    /// logged and ignored.
    pub fn from_env() -> Self {
        Self::parse(
            std::env::var(SEED_VAR).ok().as_deref(),
            std::env::var(HUMAN_COLOUR_VAR).ok().as_deref(),
        )
    }

    pub fn parse(seed: Option<&str>, human: Option<&str>) -> Self {
        let seed = seed.and_then(|s| match s.trim().parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(value = s, "ignoring invalid {}", SEED_VAR);
                None
            }
        });
        let human_colour = human.and_then(|s| match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Some(Stone::White),
            "black" | "b" => Some(Stone::Black),
            _ => {
                warn!(value = s, "ignoring invalid {}", HUMAN_COLOUR_VAR);
                None
            }
        });
        Self { human_colour, seed }
    }
}

/// Line score as a point count. Scores are never negative.
#[inline]
pub(crate) fn points(score: i32) -> u32 {
    score.max(0) as u32
}
