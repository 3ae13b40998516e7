//! Match state owned by the turn controller

use std::fmt;

use super::player::{Player, PlayerKind};
use crate::board::{Board, Stone};

/// Where the turn cycle currently stands.
///
/// `AwaitingMove` is entered at round start and again after every
/// `TurnSwitched`. `RoundWon` and `RoundDrawn` are terminal for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    MoveApplied,
    ScoringDone,
    WinChecked,
    TurnSwitched,
    RoundWon(PlayerKind),
    RoundDrawn,
}

impl Phase {
    #[inline]
    pub fn is_round_over(self) -> bool {
        matches!(self, Phase::RoundWon(_) | Phase::RoundDrawn)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::RoundWon(kind) => write!(f, "RoundWon({kind})"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Board, both players and whose move it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub board: Board,
    /// Human first, computer second
    pub players: [Player; 2],
    pub active: Stone,
    pub phase: Phase,
}

impl MatchState {
    /// Fresh round: empty board, White to move.
    pub fn new(human_colour: Stone) -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(PlayerKind::Human, human_colour),
                Player::new(PlayerKind::Computer, human_colour.opponent()),
            ],
            active: Stone::White,
            phase: Phase::AwaitingMove,
        }
    }

    #[inline]
    fn index(kind: PlayerKind) -> usize {
        match kind {
            PlayerKind::Human => 0,
            PlayerKind::Computer => 1,
        }
    }

    #[inline]
    pub fn player(&self, kind: PlayerKind) -> &Player {
        &self.players[Self::index(kind)]
    }

    #[inline]
    pub fn player_mut(&mut self, kind: PlayerKind) -> &mut Player {
        &mut self.players[Self::index(kind)]
    }

    pub fn human(&self) -> &Player {
        self.player(PlayerKind::Human)
    }

    pub fn computer(&self) -> &Player {
        self.player(PlayerKind::Computer)
    }

    /// Player holding `colour`. Falls back to the computer for `Empty`.
    pub fn kind_of(&self, colour: Stone) -> PlayerKind {
        if self.human().colour == colour {
            PlayerKind::Human
        } else {
            PlayerKind::Computer
        }
    }

    pub fn active_player(&self) -> &Player {
        self.player(self.kind_of(self.active))
    }

    pub fn winner(&self) -> Option<PlayerKind> {
        match self.phase {
            Phase::RoundWon(kind) => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_white_moves_first() {
        let state = MatchState::new(Stone::Black);
        assert_eq!(state.active, Stone::White);
        assert_eq!(state.human().colour, Stone::Black);
        assert_eq!(state.computer().colour, Stone::White);
        assert_eq!(state.active_player().kind, PlayerKind::Computer);
        assert_eq!(state.phase, Phase::AwaitingMove);
        assert!(state.board.is_board_empty());
    }

    #[test]
    fn test_phase_round_over() {
        assert!(Phase::RoundWon(PlayerKind::Human).is_round_over());
        assert!(Phase::RoundDrawn.is_round_over());
        assert!(!Phase::TurnSwitched.is_round_over());
        assert_eq!(Phase::RoundWon(PlayerKind::Human).to_string(), "RoundWon(Human)");
    }
}
