//! Turn controller
//!
//! Owns the [`MatchState`] and is the only place that mutates player
//! counters or switches the active colour. One move runs the full cycle
//!
//! ```text
//! AwaitingMove -> MoveApplied -> ScoringDone -> WinChecked -> TurnSwitched -> AwaitingMove
//!                                                    |
//!                                                    +-> RoundWon / RoundDrawn
//! ```
//!
//! A rejected move leaves the state exactly as it was.

use std::fmt;

use tracing::{debug, info};

use super::events::{GameEvent, TurnReport};
use super::player::PlayerKind;
use super::snapshot::Snapshot;
use super::state::{MatchState, Phase};
use super::{points, MatchConfig};
use crate::board::{Pos, Stone};
use crate::engine::{MoveResult, Strategy};
use crate::error::{MoveError, MoveOutcome, SnapshotError};
use crate::random::{rng_from_seed, RandomSource};
use crate::rules::{check_opening, execute_captures, score_at, WINNING_CAPTURES, WINNING_SCORE};

/// Outcome of the whole match when play stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentResult {
    Winner { kind: PlayerKind, total: u32 },
    Draw { total: u32 },
}

impl fmt::Display for TournamentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentResult::Winner { kind, total } => {
                write!(f, "{kind} won the tournament with {total} point(s)")
            }
            TournamentResult::Draw { total } => {
                write!(f, "The tournament is a draw at {total} point(s) each")
            }
        }
    }
}

pub struct TurnController {
    state: MatchState,
    strategy: Strategy,
    rng: Box<dyn RandomSource + Send>,
}

impl TurnController {
    pub fn new(config: MatchConfig) -> Self {
        Self::with_rng(config.human_colour, Box::new(rng_from_seed(config.seed)))
    }

    /// Start a match with an explicit randomness source. Without a colour
    /// the human calls the coin toss: heads plays White.
    pub fn with_rng(human_colour: Option<Stone>, mut rng: Box<dyn RandomSource + Send>) -> Self {
        let human_colour = human_colour
            .filter(|c| c.is_colour())
            .unwrap_or_else(|| {
                if rng.coin_toss() {
                    Stone::White
                } else {
                    Stone::Black
                }
            });
        info!(human = %human_colour, "match started");
        Self {
            state: MatchState::new(human_colour),
            strategy: Strategy::new(),
            rng,
        }
    }

    /// Wrap an existing state, e.g. a position built by hand.
    pub fn from_state(state: MatchState, rng: Box<dyn RandomSource + Send>) -> Self {
        Self {
            state,
            strategy: Strategy::new(),
            rng,
        }
    }

    #[inline]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[inline]
    pub fn is_round_over(&self) -> bool {
        self.state.phase.is_round_over()
    }

    /// Player to move
    #[inline]
    pub fn active_kind(&self) -> PlayerKind {
        self.state.kind_of(self.state.active)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Apply a move entered by the human.
    pub fn play_human(&mut self, pos: Pos) -> MoveOutcome<TurnReport> {
        self.ensure_turn(PlayerKind::Human)?;
        self.apply_move(pos)
    }

    /// Let the strategy choose for the computer and apply the move.
    pub fn play_computer(&mut self) -> MoveOutcome<(MoveResult, TurnReport)> {
        self.ensure_turn(PlayerKind::Computer)?;
        let decision = self.decide(PlayerKind::Computer)?;
        let report = self.apply_move(decision.best_move)?;
        Ok((decision, report))
    }

    /// Apply a computer move chosen elsewhere (a worker thread). The move is
    /// validated like any other.
    pub fn apply_computer_move(&mut self, decision: &MoveResult) -> MoveOutcome<TurnReport> {
        self.ensure_turn(PlayerKind::Computer)?;
        self.apply_move(decision.best_move)
    }

    /// The move the strategy would play for the human. The board is not
    /// touched.
    pub fn suggest_move(&mut self) -> MoveOutcome<MoveResult> {
        self.ensure_turn(PlayerKind::Human)?;
        self.decide(PlayerKind::Human)
    }

    fn decide(&mut self, kind: PlayerKind) -> MoveOutcome<MoveResult> {
        let player = *self.state.player(kind);
        self.strategy
            .best_move(&self.state.board, player.colour, player.total_moves, self.rng.as_mut())
            .ok_or(MoveError::RoundOver)
    }

    fn ensure_turn(&self, kind: PlayerKind) -> MoveOutcome<()> {
        if self.is_round_over() {
            return Err(MoveError::RoundOver);
        }
        if self.active_kind() != kind {
            return Err(MoveError::NotYourTurn);
        }
        Ok(())
    }

    fn transition(&mut self, phase: Phase) {
        self.state.phase = phase;
    }

    /// One full turn for the active player.
    fn apply_move(&mut self, pos: Pos) -> MoveOutcome<TurnReport> {
        if !pos.in_bounds() {
            return Err(MoveError::OutOfBounds {
                row: pos.row as i32,
                col: pos.col as i32,
            });
        }
        let colour = self.state.active;
        let kind = self.state.kind_of(colour);
        let moves_made = self.state.player(kind).total_moves;

        let placed = check_opening(&self.state.board, pos, colour, moves_made)
            .and_then(|()| self.state.board.place_piece(pos, colour));
        if let Err(err) = placed {
            debug!(player = %kind, %pos, %err, "move rejected");
            return Err(err);
        }
        self.transition(Phase::MoveApplied);

        let score = points(score_at(&self.state.board, pos, colour));
        let captured = execute_captures(&mut self.state.board, pos, colour)?;
        let pairs = (captured.len() / 2) as u32;
        let player = self.state.player_mut(kind);
        player.round_points += score;
        player.capture_points += pairs;
        let capture_points = player.capture_points;
        self.transition(Phase::ScoringDone);

        let mut events = vec![GameEvent::BoardChanged { player: kind, colour, pos }];
        if score > 0 {
            events.push(GameEvent::Scored { player: kind, points: score });
        }
        if pairs > 0 {
            events.push(GameEvent::Captured {
                player: kind,
                pieces: captured.len() as u32,
            });
        }
        info!(player = %kind, %colour, %pos, score, pairs, "move applied");

        self.transition(Phase::WinChecked);
        if score >= WINNING_SCORE as u32 || capture_points >= WINNING_CAPTURES {
            let total = self.state.player(kind).match_total();
            info!(winner = %kind, %colour, total, "round won");
            events.push(GameEvent::RoundWon { player: kind, colour, total });
            self.transition(Phase::RoundWon(kind));
        } else if self.state.board.is_full() {
            info!("round drawn");
            events.push(GameEvent::RoundDrawn);
            self.transition(Phase::RoundDrawn);
        } else {
            self.state.player_mut(kind).total_moves += 1;
            self.state.active = colour.opponent();
            self.transition(Phase::TurnSwitched);
            self.transition(Phase::AwaitingMove);
        }

        Ok(TurnReport {
            player: kind,
            colour,
            pos,
            points: score,
            captured,
            events,
        })
    }

    /// Fold the round into tournament points, clear the board and assign
    /// colours: the leader takes White, a tie goes to a coin toss. Returns
    /// the player who opens. Refused while the round is still being played.
    pub fn start_next_round(&mut self) -> MoveOutcome<PlayerKind> {
        if !self.is_round_over() {
            return Err(MoveError::RoundInProgress);
        }
        for player in &mut self.state.players {
            player.end_round();
        }
        let human = self.state.human().tournament_points;
        let computer = self.state.computer().tournament_points;
        let opener = match human.cmp(&computer) {
            std::cmp::Ordering::Greater => PlayerKind::Human,
            std::cmp::Ordering::Less => PlayerKind::Computer,
            std::cmp::Ordering::Equal => {
                if self.rng.coin_toss() {
                    PlayerKind::Human
                } else {
                    PlayerKind::Computer
                }
            }
        };

        self.state.player_mut(opener).colour = Stone::White;
        self.state.player_mut(opener.other()).colour = Stone::Black;
        self.state.board.reset();
        self.state.active = Stone::White;
        self.transition(Phase::AwaitingMove);
        info!(opener = %opener, human, computer, "next round");
        Ok(opener)
    }

    /// Compare everything each side has earned, the round in progress
    /// included.
    pub fn tournament_result(&self) -> TournamentResult {
        let human = self.state.human().match_total();
        let computer = self.state.computer().match_total();
        match human.cmp(&computer) {
            std::cmp::Ordering::Greater => TournamentResult::Winner {
                kind: PlayerKind::Human,
                total: human,
            },
            std::cmp::Ordering::Less => TournamentResult::Winner {
                kind: PlayerKind::Computer,
                total: computer,
            },
            std::cmp::Ordering::Equal => TournamentResult::Draw { total: human },
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Replace the match with a saved one. On error the current match is
    /// kept as it was.
    pub fn load(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let state = snapshot.restore()?;
        self.state = state;
        info!(next = %snapshot.next_player, colour = %snapshot.next_colour, "game loaded");
        Ok(())
    }
}
