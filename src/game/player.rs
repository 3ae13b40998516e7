//! Per-player counters

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Stone;

/// Who decides a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl PlayerKind {
    #[inline]
    pub fn other(self) -> PlayerKind {
        match self {
            PlayerKind::Human => PlayerKind::Computer,
            PlayerKind::Computer => PlayerKind::Human,
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => f.write_str("Human"),
            PlayerKind::Computer => f.write_str("Computer"),
        }
    }
}

/// One side of the match. Colour can change between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub kind: PlayerKind,
    pub colour: Stone,
    /// Points from lines this round
    pub round_points: u32,
    /// Pairs captured this round
    pub capture_points: u32,
    /// Points carried over from finished rounds
    pub tournament_points: u32,
    /// Moves made this round
    pub total_moves: u32,
}

impl Player {
    pub fn new(kind: PlayerKind, colour: Stone) -> Self {
        Self {
            kind,
            colour,
            round_points: 0,
            capture_points: 0,
            tournament_points: 0,
            total_moves: 0,
        }
    }

    /// Round points plus capture points
    #[inline]
    pub fn round_total(&self) -> u32 {
        self.round_points + self.capture_points
    }

    /// Everything earned so far, including the round in progress
    #[inline]
    pub fn match_total(&self) -> u32 {
        self.tournament_points + self.round_total()
    }

    /// Fold this round into the tournament total and clear the round.
    pub fn end_round(&mut self) {
        self.tournament_points = self.match_total();
        self.round_points = 0;
        self.capture_points = 0;
        self.total_moves = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_round_folds_points() {
        let mut player = Player::new(PlayerKind::Human, Stone::White);
        player.round_points = 6;
        player.capture_points = 2;
        player.tournament_points = 11;
        player.total_moves = 14;

        assert_eq!(player.round_total(), 8);
        assert_eq!(player.match_total(), 19);

        player.end_round();
        assert_eq!(player.tournament_points, 19);
        assert_eq!(player.round_points, 0);
        assert_eq!(player.capture_points, 0);
        assert_eq!(player.total_moves, 0);
        assert_eq!(player.colour, Stone::White);
    }

    #[test]
    fn test_kind_other() {
        assert_eq!(PlayerKind::Human.other(), PlayerKind::Computer);
        assert_eq!(PlayerKind::Computer.to_string(), "Computer");
    }
}
