//! Saved games
//!
//! A [`Snapshot`] carries exactly what a saved game records: the grid, each
//! side's captured pairs and tournament score, and who moves next with which
//! colour. Round points, move counts and whether the round is already won
//! are rebuilt from the grid on restore.
//!
//! The text form is the classic save file:
//!
//! ```text
//! Board:
//! OOOOOOOOOOOOOOOOOOO
//! ... 19 rows of O/W/B ...
//!
//! Human:
//! Captured pairs: 1
//! Score: 4
//!
//! Computer:
//! Captured pairs: 0
//! Score: 7
//!
//! Next Player: Human - White
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::player::{Player, PlayerKind};
use super::state::{MatchState, Phase};
use super::points;
use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::error::SnapshotError;
use crate::rules::{has_five, score_position, WINNING_CAPTURES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 19 rows of `O`, `W` and `B`
    pub grid: Vec<String>,
    pub human_captures: u32,
    pub human_score: u32,
    pub computer_captures: u32,
    pub computer_score: u32,
    pub next_player: PlayerKind,
    pub next_colour: Stone,
}

impl Snapshot {
    /// Record the fields of a live match.
    pub fn capture(state: &MatchState) -> Self {
        let human = state.human();
        let computer = state.computer();
        Self {
            grid: state.board.to_rows(),
            human_captures: human.capture_points,
            human_score: human.tournament_points,
            computer_captures: computer.capture_points,
            computer_score: computer.tournament_points,
            next_player: state.kind_of(state.active),
            next_colour: state.active,
        }
    }

    /// Parse the grid into a board.
    pub fn board(&self) -> Result<Board, SnapshotError> {
        if self.grid.len() != BOARD_SIZE {
            return Err(SnapshotError::RowCount(self.grid.len()));
        }
        let mut board = Board::new();
        for (row, line) in self.grid.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_SIZE {
                return Err(SnapshotError::RowLength { row, len });
            }
            for (col, found) in line.chars().enumerate() {
                let stone =
                    Stone::from_char(found).ok_or(SnapshotError::InvalidCell { row, col, found })?;
                if stone.is_colour() {
                    board
                        .place_piece(Pos::new(row as u8, col as u8), stone)
                        .map_err(|_| SnapshotError::InvalidCell { row, col, found })?;
                }
            }
        }
        Ok(board)
    }

    /// Rebuild a match from the saved fields. Nothing is shared with any
    /// live state, so a failure leaves the caller's match untouched.
    pub fn restore(&self) -> Result<MatchState, SnapshotError> {
        if !self.next_colour.is_colour() {
            return Err(SnapshotError::InvalidColour);
        }
        let board = self.board()?;

        let human_colour = match self.next_player {
            PlayerKind::Human => self.next_colour,
            PlayerKind::Computer => self.next_colour.opponent(),
        };
        let restore_player = |kind: PlayerKind, colour: Stone, captures: u32, score: u32| Player {
            kind,
            colour,
            round_points: points(score_position(&board, colour)),
            capture_points: captures,
            tournament_points: score,
            total_moves: board.count(colour) as u32,
        };
        let human = restore_player(
            PlayerKind::Human,
            human_colour,
            self.human_captures,
            self.human_score,
        );
        let computer = restore_player(
            PlayerKind::Computer,
            human_colour.opponent(),
            self.computer_captures,
            self.computer_score,
        );
        // The winner of a finished round keeps the move, so `next_player`
        // settles a position where both sides qualify.
        let has_won = |player: &Player| {
            player.capture_points >= WINNING_CAPTURES || has_five(&board, player.colour)
        };
        let phase = match (has_won(&human), has_won(&computer)) {
            (true, true) => Phase::RoundWon(self.next_player),
            (true, false) => Phase::RoundWon(PlayerKind::Human),
            (false, true) => Phase::RoundWon(PlayerKind::Computer),
            (false, false) if board.is_full() => Phase::RoundDrawn,
            (false, false) => Phase::AwaitingMove,
        };
        debug!(
            human_round = human.round_points,
            computer_round = computer.round_points,
            next = %self.next_player,
            %phase,
            "snapshot restored"
        );

        Ok(MatchState {
            board,
            players: [human, computer],
            active: self.next_colour,
            phase,
        })
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        for row in &self.grid {
            writeln!(f, "{row}")?;
        }
        writeln!(f)?;
        writeln!(f, "Human:")?;
        writeln!(f, "Captured pairs: {}", self.human_captures)?;
        writeln!(f, "Score: {}", self.human_score)?;
        writeln!(f)?;
        writeln!(f, "Computer:")?;
        writeln!(f, "Captured pairs: {}", self.computer_captures)?;
        writeln!(f, "Score: {}", self.computer_score)?;
        writeln!(f)?;
        write!(f, "Next Player: {} - {}", self.next_player, self.next_colour)
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<u32, SnapshotError> {
    let value = value.trim();
    value.parse().map_err(|_| SnapshotError::InvalidNumber {
        field,
        found: value.to_owned(),
    })
}

fn parse_next_player(value: &str) -> Result<(PlayerKind, Stone), SnapshotError> {
    let value = value.trim();
    let (player, colour) = value
        .split_once('-')
        .ok_or_else(|| SnapshotError::InvalidNextPlayer(value.to_owned()))?;
    let player = match player.trim() {
        "Human" => PlayerKind::Human,
        "Computer" => PlayerKind::Computer,
        _ => return Err(SnapshotError::InvalidNextPlayer(value.to_owned())),
    };
    let colour = match colour.trim() {
        "White" => Stone::White,
        "Black" => Stone::Black,
        _ => return Err(SnapshotError::InvalidColour),
    };
    Ok((player, colour))
}

impl FromStr for Snapshot {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim);
        if lines.next() != Some("Board:") {
            return Err(SnapshotError::MissingField("Board"));
        }
        let grid: Vec<String> = lines
            .by_ref()
            .take_while(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();

        let mut section = None;
        let mut captures: [Option<u32>; 2] = [None, None];
        let mut scores: [Option<u32>; 2] = [None, None];
        let mut next = None;
        for line in lines {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let slot = match section {
                Some(PlayerKind::Human) => Some(0),
                Some(PlayerKind::Computer) => Some(1),
                None => None,
            };
            match (key.trim(), slot) {
                ("Human", _) => section = Some(PlayerKind::Human),
                ("Computer", _) => section = Some(PlayerKind::Computer),
                ("Captured pairs", Some(i)) => {
                    captures[i] = Some(parse_number("Captured pairs", value)?);
                }
                ("Score", Some(i)) => scores[i] = Some(parse_number("Score", value)?),
                ("Next Player", _) => next = Some(parse_next_player(value)?),
                _ => {}
            }
        }

        let (next_player, next_colour) = next.ok_or(SnapshotError::MissingField("Next Player"))?;
        let [human_captures, computer_captures] = captures;
        let [human_score, computer_score] = scores;
        Ok(Self {
            grid,
            human_captures: human_captures.ok_or(SnapshotError::MissingField("Captured pairs"))?,
            human_score: human_score.ok_or(SnapshotError::MissingField("Score"))?,
            computer_captures: computer_captures
                .ok_or(SnapshotError::MissingField("Captured pairs"))?,
            computer_score: computer_score.ok_or(SnapshotError::MissingField("Score"))?,
            next_player,
            next_colour,
        })
    }
}
