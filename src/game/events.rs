//! Structured notifications produced by an applied move

use std::fmt;

use super::player::PlayerKind;
use crate::board::{Pos, Stone};

/// Something the presentation layer may want to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece went down (always the first event of a report)
    BoardChanged { player: PlayerKind, colour: Stone, pos: Pos },
    Scored { player: PlayerKind, points: u32 },
    /// `pieces` is two per captured pair
    Captured { player: PlayerKind, pieces: u32 },
    RoundWon {
        player: PlayerKind,
        colour: Stone,
        /// Round, capture and tournament points together
        total: u32,
    },
    RoundDrawn,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::BoardChanged { player, colour, pos } => {
                write!(f, "{player} ({colour}) played {pos}")
            }
            GameEvent::Scored { player, points } => write!(f, "{player} scored {points} point(s)"),
            GameEvent::Captured { player, pieces } => {
                write!(f, "{player} captured {pieces} piece(s)")
            }
            GameEvent::RoundWon { player, colour, total } => {
                write!(f, "{player} ({colour}) won the round with {total} point(s)")
            }
            GameEvent::RoundDrawn => f.write_str("The board is full, the round is a draw"),
        }
    }
}

/// Result of one applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerKind,
    pub colour: Stone,
    pub pos: Pos,
    /// Line points earned by this move
    pub points: u32,
    /// Cells emptied by captures, two per pair
    pub captured: Vec<Pos>,
    pub events: Vec<GameEvent>,
}

impl TurnReport {
    /// True when this move ended the round.
    pub fn ends_round(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::RoundWon { .. } | GameEvent::RoundDrawn))
    }

    #[inline]
    pub fn pairs_captured(&self) -> u32 {
        (self.captured.len() / 2) as u32
    }
}
