//! Game state management for the Pente GUI
//!
//! Wraps the [`TurnController`] with what the window needs on top: the
//! worker thread that evaluates computer moves, the last decision and hint,
//! and a log of every event the controller reported.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::GameFileError;
use crate::game::{MatchConfig, PlayerKind, Snapshot, TournamentResult, TurnController, TurnReport};
use crate::{MoveResult, Pos, Stone};

/// Default save file, next to the working directory
pub const SAVE_FILE: &str = "pente_save.txt";

/// Log lines kept for the side panel
const LOG_LIMIT: usize = 200;

/// Computer move computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Option<MoveResult>>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub controller: TurnController,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub last_move: Option<Pos>,
    /// Cells emptied by the last move's captures
    pub last_captured: Vec<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub hint: Option<MoveResult>,
    pub log: Vec<String>,
    pub message: Option<String>,
    /// Set once the player stops the tournament
    pub final_result: Option<TournamentResult>,
    pub save_path: PathBuf,
    config: MatchConfig,
}

impl GameState {
    pub fn new(config: MatchConfig) -> Self {
        let controller = TurnController::new(config);
        let human = controller.state().human().colour;
        Self {
            controller,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            last_move: None,
            last_captured: Vec::new(),
            last_ai_result: None,
            hint: None,
            log: vec![format!("New tournament. You play {human}.")],
            message: None,
            final_result: None,
            save_path: PathBuf::from(SAVE_FILE),
            config,
        }
    }

    /// Fresh tournament with the same configuration; the seed is dropped so
    /// a new match does not replay the previous one.
    pub fn reset(&mut self) {
        let config = MatchConfig {
            seed: None,
            ..self.config
        };
        let save_path = std::mem::take(&mut self.save_path);
        *self = Self::new(config);
        self.save_path = save_path;
    }

    pub fn human_colour(&self) -> Stone {
        self.controller.state().human().colour
    }

    pub fn is_round_over(&self) -> bool {
        self.controller.is_round_over()
    }

    /// No more moves accepted: round ended or tournament stopped
    pub fn is_finished(&self) -> bool {
        self.is_round_over() || self.final_result.is_some()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_finished() && self.controller.active_kind() == PlayerKind::Human
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_finished() && self.controller.active_kind() == PlayerKind::Computer
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// White's second move must avoid the center block
    pub fn second_move_pending(&self) -> bool {
        let human = self.controller.state().human();
        self.is_human_turn() && human.colour == Stone::White && human.total_moves == 1
    }

    fn push_log(&mut self, line: String) {
        self.log.push(line);
        if self.log.len() > LOG_LIMIT {
            let excess = self.log.len() - LOG_LIMIT;
            self.log.drain(..excess);
        }
    }

    fn record(&mut self, report: TurnReport) {
        self.last_move = Some(report.pos);
        self.last_captured = report.captured;
        self.hint = None;
        self.message = None;
        for event in report.events {
            self.push_log(event.to_string());
        }
        self.move_timer.start();
    }

    /// Attempt to place the human's piece
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_ai_thinking() {
            return Err("The computer is thinking".to_string());
        }
        if self.final_result.is_some() {
            return Err("The tournament is over".to_string());
        }
        let report = self.controller.play_human(pos).map_err(|e| e.to_string())?;
        self.record(report);
        Ok(())
    }

    /// Hand the computer's turn to a worker thread. Never starts a second
    /// evaluation while one is pending.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let state = self.controller.state();
        let board = state.board.clone();
        let computer = *state.computer();
        let strategy = self.controller.strategy();

        let (tx, rx) = channel();
        thread::spawn(move || {
            let mut rng = rand::thread_rng();
            let result = strategy.best_move(&board, computer.colour, computer.total_moves, &mut rng);
            let _ = tx.send(result);
        });
        debug!(colour = %computer.colour, "computer thinking");

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the worker's move once it arrives
    pub fn check_ai_result(&mut self) {
        let received = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("The computer could not move".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some((result, elapsed)) = received else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.move_timer.set_ai_time(elapsed);

        let Some(decision) = result else {
            self.message = Some("The computer could not find a move".to_string());
            return;
        };
        match self.controller.apply_computer_move(&decision) {
            Ok(report) => {
                self.push_log(decision.to_string());
                self.last_ai_result = Some(decision);
                self.record(report);
            }
            Err(err) => {
                warn!(%err, pos = %decision.best_move, "computer move rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the strategy what the human should play
    pub fn request_hint(&mut self) {
        if self.is_ai_thinking() || self.final_result.is_some() {
            return;
        }
        match self.controller.suggest_move() {
            Ok(hint) => {
                self.message = Some(format!("Hint: {hint}"));
                self.hint = Some(hint);
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn next_round(&mut self) {
        if !self.is_round_over() || self.final_result.is_some() {
            return;
        }
        let opener = match self.controller.start_next_round() {
            Ok(opener) => opener,
            Err(err) => {
                self.message = Some(err.to_string());
                return;
            }
        };
        let human = self.human_colour();
        self.last_move = None;
        self.last_captured.clear();
        self.hint = None;
        self.last_ai_result = None;
        self.message = None;
        self.push_log(format!("Next round: {opener} opens as White. You play {human}."));
        self.move_timer.start();
    }

    /// Stop the tournament and announce the result
    pub fn quit_tournament(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        let result = self.controller.tournament_result();
        self.push_log(result.to_string());
        self.final_result = Some(result);
    }

    pub fn save_game(&mut self) -> Result<(), GameFileError> {
        let path = self.save_path.clone();
        write_snapshot(&path, &self.controller.snapshot())?;
        self.push_log(format!("Game saved to {}", path.display()));
        Ok(())
    }

    pub fn load_game(&mut self) -> Result<(), GameFileError> {
        if self.is_ai_thinking() {
            return Err(GameFileError::Busy);
        }
        let path = self.save_path.clone();
        let snapshot = read_snapshot(&path)?;
        self.controller.load(&snapshot)?;
        self.last_move = None;
        self.last_captured.clear();
        self.hint = None;
        self.last_ai_result = None;
        self.final_result = None;
        self.message = None;
        self.push_log(format!("Game loaded from {}", path.display()));
        self.move_timer.start();
        Ok(())
    }
}

pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), GameFileError> {
    fs::write(path, snapshot.to_string())?;
    Ok(())
}

pub fn read_snapshot(path: &Path) -> Result<Snapshot, GameFileError> {
    let text = fs::read_to_string(path)?;
    Ok(text.parse()?)
}
