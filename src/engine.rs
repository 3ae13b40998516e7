//! Move selection for the computer player
//!
//! The strategy is a strict cascade: rules are tried in order and the first
//! one that finds a qualifying cell decides the move. Later rules never
//! override an earlier hit.
//!
//! 1. **Opening**: White's first move takes the center, its second move a
//!    random cell outside the center block
//! 2. **Five**: complete our own five, else block the opponent's
//! 3. **Captures**: capture a pair, else take the cell the opponent would
//!    capture from
//! 4. **Points**: block the opponent's best scoring cell, else score
//! 5. **Lines**: block, then build, a line longer than two
//! 6. **Initiative**: fill the opponent's gaps, then our own, then extend
//! 7. **Random**: any empty cell
//!
//! # Example
//!
//! ```
//! use pente::{Board, Pos, Stone, Strategy, MoveReason};
//! use pente::random::ScriptedSource;
//!
//! let board = Board::new();
//! let mut rng = ScriptedSource::new([0]);
//!
//! let result = Strategy::new().best_move(&board, Stone::White, 0, &mut rng).unwrap();
//! assert_eq!(result.best_move, Pos::new(9, 9));
//! assert_eq!(result.reason, MoveReason::OpeningCenter);
//! ```

use std::fmt;
use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos, Stone, CENTER, TOTAL_CELLS};
use crate::eval::{
    best_capture_cell, best_scoring_cell, first_developing_line, first_initiative_extension,
    first_initiative_fill, ScoredCell,
};
use crate::random::RandomSource;
use crate::rules::WINNING_SCORE;

/// Which cascade rule produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveReason {
    /// White's first move on the center
    OpeningCenter,
    /// White's second move outside the center block
    OpeningSecond,
    /// Completes five and wins the round
    CompleteFive,
    /// Stops the opponent completing five
    BlockFive,
    /// Captures opponent pair(s)
    Capture,
    /// Occupies the opponent's capturing cell
    PreventCapture,
    /// Takes the opponent's best scoring cell
    BlockScore,
    /// Scores points
    Score,
    /// Blocks an opponent line longer than two
    BlockLine,
    /// Builds an own line longer than two
    BuildLine,
    /// Fills the gap in the opponent's initiative
    BlockInitiative,
    /// Fills the gap in our own initiative
    FillInitiative,
    /// Extends three cells out along open space
    StartInitiative,
    /// Nothing else applied
    Random,
}

impl MoveReason {
    /// Short explanation for hints and logs
    pub fn describe(self) -> &'static str {
        match self {
            MoveReason::OpeningCenter => "opens on the center of the board",
            MoveReason::OpeningSecond => "keeps the second piece three intersections from the center",
            MoveReason::CompleteFive => "scores five in a row and wins the round",
            MoveReason::BlockFive => "blocks five in a row",
            MoveReason::Capture => "captures opponent pieces",
            MoveReason::PreventCapture => "prevents pieces from being captured",
            MoveReason::BlockScore => "blocks the opponent from scoring",
            MoveReason::Score => "scores points",
            MoveReason::BlockLine => "blocks a developing line",
            MoveReason::BuildLine => "builds a developing line",
            MoveReason::BlockInitiative => "blocks the opponent's initiative",
            MoveReason::FillInitiative => "fills the initiative",
            MoveReason::StartInitiative => "starts an initiative",
            MoveReason::Random => "is a random position since no other option applied",
        }
    }
}

impl fmt::Display for MoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Chosen move with the data needed to explain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Points, pairs or line length behind the choice (0 when not applicable)
    pub value: i32,
    pub reason: MoveReason,
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn new(best_move: Pos, value: i32, reason: MoveReason) -> Self {
        Self {
            best_move,
            value,
            reason,
            time_ms: 0,
        }
    }

    #[inline]
    fn from_cell(cell: ScoredCell, reason: MoveReason) -> Self {
        Self::new(cell.pos, cell.value, reason)
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Placing the piece in {} {}", self.best_move, self.reason)
    }
}

/// The cascade. Holds only the sampling limit for the random rules; all
/// board access is read-only.
#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    /// Random draws tried before falling back to a row-major scan
    max_draws: usize,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_draws: TOTAL_CELLS * 8,
        }
    }

    #[must_use]
    pub fn with_max_draws(max_draws: usize) -> Self {
        Self { max_draws }
    }

    /// Pick the move for `stone`, which has made `moves_made` moves this
    /// round. `None` only when the board is full.
    pub fn best_move(
        &self,
        board: &Board,
        stone: Stone,
        moves_made: u32,
        rng: &mut dyn RandomSource,
    ) -> Option<MoveResult> {
        let start = Instant::now();
        let mut result = self.cascade(board, stone, moves_made, rng)?;
        result.time_ms = start.elapsed().as_millis() as u64;
        debug!(
            colour = %stone,
            pos = %result.best_move,
            reason = ?result.reason,
            value = result.value,
            "move selected"
        );
        Some(result)
    }

    fn cascade(
        &self,
        board: &Board,
        stone: Stone,
        moves_made: u32,
        rng: &mut dyn RandomSource,
    ) -> Option<MoveResult> {
        let opponent = stone.opponent();

        // 1-2. Opening
        if stone == Stone::White {
            match moves_made {
                0 => return Some(MoveResult::new(CENTER, 0, MoveReason::OpeningCenter)),
                1 => {
                    if let Some(pos) = self.random_second_cell(board, rng) {
                        return Some(MoveResult::new(pos, 0, MoveReason::OpeningSecond));
                    }
                }
                _ => {}
            }
        }

        // 3. Win
        let own_best = best_scoring_cell(board, stone);
        if let Some(cell) = own_best.filter(|c| c.value >= WINNING_SCORE) {
            return Some(MoveResult::from_cell(cell, MoveReason::CompleteFive));
        }

        // 4. Block the opponent's win
        let opp_best = best_scoring_cell(board, opponent);
        if let Some(cell) = opp_best.filter(|c| c.value >= WINNING_SCORE) {
            return Some(MoveResult::from_cell(cell, MoveReason::BlockFive));
        }

        // 5. Capture
        if let Some(cell) = best_capture_cell(board, stone) {
            return Some(MoveResult::from_cell(cell, MoveReason::Capture));
        }

        // 6. Take the cell the opponent would capture from
        if let Some(cell) = best_capture_cell(board, opponent) {
            return Some(MoveResult::from_cell(cell, MoveReason::PreventCapture));
        }

        // 7. Block scoring (any cell worth at least one point to them)
        if let Some(cell) = opp_best {
            return Some(MoveResult::from_cell(cell, MoveReason::BlockScore));
        }

        // 8. Score
        if let Some(cell) = own_best {
            return Some(MoveResult::from_cell(cell, MoveReason::Score));
        }

        // 9-10. Developing lines
        if let Some(cell) = first_developing_line(board, opponent) {
            return Some(MoveResult::from_cell(cell, MoveReason::BlockLine));
        }
        if let Some(cell) = first_developing_line(board, stone) {
            return Some(MoveResult::from_cell(cell, MoveReason::BuildLine));
        }

        // 11-13. Initiative
        if let Some(pos) = first_initiative_fill(board, opponent) {
            return Some(MoveResult::new(pos, 0, MoveReason::BlockInitiative));
        }
        if let Some(pos) = first_initiative_fill(board, stone) {
            return Some(MoveResult::new(pos, 0, MoveReason::FillInitiative));
        }
        if let Some(pos) = first_initiative_extension(board, stone) {
            return Some(MoveResult::new(pos, 0, MoveReason::StartInitiative));
        }

        // 14. Random
        self.random_cell(board, rng)
            .map(|pos| MoveResult::new(pos, 0, MoveReason::Random))
    }

    /// Uniformly sampled empty cell.
    ///
    /// Resamples up to the draw limit, then takes the first empty cell in
    /// row-major order. `None` only on a full board.
    pub fn random_cell(&self, board: &Board, rng: &mut dyn RandomSource) -> Option<Pos> {
        self.sample(rng, |pos| board.is_empty(pos))
            .or_else(|| board.empty_cells().next())
    }

    /// Sampled cell that is empty and outside the center block, falling back
    /// like [`Strategy::random_cell`].
    pub fn random_second_cell(&self, board: &Board, rng: &mut dyn RandomSource) -> Option<Pos> {
        self.sample(rng, |pos| board.is_second_move_legal(pos))
            .or_else(|| board.empty_cells().find(|&pos| board.is_second_move_legal(pos)))
    }

    fn sample(&self, rng: &mut dyn RandomSource, accept: impl Fn(Pos) -> bool) -> Option<Pos> {
        (0..self.max_draws)
            .map(|_| Pos::new(rng.next_coord(), rng.next_coord()))
            .find(|&pos| accept(pos))
    }
}
