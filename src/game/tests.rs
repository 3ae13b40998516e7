//! End-to-end turn controller scenarios

use super::*;
use crate::board::{Board, Pos, Stone, CENTER, TOTAL_CELLS};
use crate::engine::MoveReason;
use crate::error::{MoveError, SnapshotError};
use crate::random::ScriptedSource;
use crate::rules::{count_captures, score_at};

fn scripted(values: &[u8]) -> Box<ScriptedSource> {
    Box::new(ScriptedSource::new(values.to_vec()))
}

/// Controller over a hand-built position, past the opening.
fn midgame(human_colour: Stone, active: Stone, pieces: &[(u8, u8, Stone)]) -> TurnController {
    let mut state = MatchState::new(human_colour);
    for &(r, c, s) in pieces {
        state.board.place_piece(Pos::new(r, c), s).unwrap();
    }
    for player in &mut state.players {
        player.total_moves = 4;
    }
    state.active = active;
    TurnController::from_state(state, scripted(&[0]))
}

#[test]
fn test_coin_toss_decides_first_colour() {
    // Even draw is heads: human takes White
    let controller = TurnController::with_rng(None, scripted(&[4]));
    assert_eq!(controller.state().human().colour, Stone::White);
    assert_eq!(controller.active_kind(), PlayerKind::Human);

    let controller = TurnController::with_rng(None, scripted(&[3]));
    assert_eq!(controller.state().human().colour, Stone::Black);
    assert_eq!(controller.active_kind(), PlayerKind::Computer);
}

#[test]
fn test_opening_sequence_for_human_white() {
    let mut controller = TurnController::with_rng(Some(Stone::White), scripted(&[0, 0]));

    let err = controller.play_human(Pos::new(9, 8)).unwrap_err();
    assert_eq!(err, MoveError::IllegalFirstMove(Pos::new(9, 8)));
    assert!(controller.state().board.is_board_empty());
    assert_eq!(controller.phase(), Phase::AwaitingMove);
    assert_eq!(controller.state().active, Stone::White);

    let report = controller.play_human(CENTER).unwrap();
    assert_eq!(report.points, 0);
    assert_eq!(
        report.events,
        vec![GameEvent::BoardChanged {
            player: PlayerKind::Human,
            colour: Stone::White,
            pos: CENTER
        }]
    );
    assert_eq!(controller.state().human().total_moves, 1);
    assert_eq!(controller.active_kind(), PlayerKind::Computer);

    assert_eq!(controller.play_human(Pos::new(0, 5)), Err(MoveError::NotYourTurn));

    // Nothing to react to: the computer falls through to a random cell
    let (decision, _) = controller.play_computer().unwrap();
    assert_eq!(decision.reason, MoveReason::Random);
    assert_eq!(decision.best_move, Pos::new(0, 0));

    let inside = Pos::new(10, 10);
    assert_eq!(
        controller.play_human(inside),
        Err(MoveError::IllegalSecondMove(inside))
    );
    assert_eq!(
        controller.play_human(Pos::new(0, 0)),
        Err(MoveError::OccupiedCell(Pos::new(0, 0)))
    );
    assert!(controller.play_human(Pos::new(3, 3)).is_ok());
    assert_eq!(controller.state().human().total_moves, 2);
}

#[test]
fn test_computer_white_opens_on_center() {
    let mut controller = TurnController::with_rng(Some(Stone::Black), scripted(&[1, 2]));
    assert_eq!(controller.play_human(CENTER), Err(MoveError::NotYourTurn));

    let (decision, report) = controller.play_computer().unwrap();
    assert_eq!(decision.reason, MoveReason::OpeningCenter);
    assert_eq!(report.pos, CENTER);
    assert_eq!(controller.state().board.get(CENTER), Stone::White);
}

#[test]
fn test_flanking_capture_scores_one_pair() {
    let mut controller = midgame(
        Stone::White,
        Stone::White,
        &[(5, 5, Stone::White), (5, 6, Stone::Black), (5, 7, Stone::Black)],
    );
    let report = controller.play_human(Pos::new(5, 8)).unwrap();

    assert_eq!(report.captured, vec![Pos::new(5, 7), Pos::new(5, 6)]);
    assert!(report.events.contains(&GameEvent::Captured {
        player: PlayerKind::Human,
        pieces: 2
    }));
    let board = &controller.state().board;
    assert!(board.is_empty(Pos::new(5, 6)));
    assert!(board.is_empty(Pos::new(5, 7)));
    assert_eq!(board.count(Stone::Black), 0);
    assert_eq!(controller.state().human().capture_points, 1);
    assert_eq!(controller.active_kind(), PlayerKind::Computer);
}

#[test]
fn test_five_in_a_row_wins_round() {
    let mut controller = midgame(
        Stone::White,
        Stone::White,
        &[
            (2, 2, Stone::White),
            (2, 3, Stone::White),
            (2, 4, Stone::White),
            (2, 5, Stone::White),
            (8, 8, Stone::Black),
        ],
    );
    let report = controller.play_human(Pos::new(2, 6)).unwrap();

    assert_eq!(report.points, 5);
    assert!(report.ends_round());
    assert_eq!(
        report.events.last(),
        Some(&GameEvent::RoundWon {
            player: PlayerKind::Human,
            colour: Stone::White,
            total: 5
        })
    );
    assert_eq!(controller.phase(), Phase::RoundWon(PlayerKind::Human));
    assert_eq!(controller.state().winner(), Some(PlayerKind::Human));
    // No turn switch after a win
    assert_eq!(controller.state().active, Stone::White);
    assert_eq!(controller.state().human().total_moves, 4);

    assert_eq!(controller.play_human(Pos::new(0, 0)), Err(MoveError::RoundOver));
    assert_eq!(controller.play_computer().unwrap_err(), MoveError::RoundOver);
}

#[test]
fn test_fifth_capture_wins_round() {
    let mut controller = midgame(
        Stone::Black,
        Stone::Black,
        &[(10, 1, Stone::Black), (10, 2, Stone::White), (10, 3, Stone::White)],
    );
    let mut state = controller.state().clone();
    state.players[0].capture_points = 4;
    controller = TurnController::from_state(state, scripted(&[0]));

    let report = controller.play_human(Pos::new(10, 4)).unwrap();
    assert_eq!(report.pairs_captured(), 1);
    assert_eq!(controller.state().human().capture_points, 5);
    assert_eq!(controller.phase(), Phase::RoundWon(PlayerKind::Human));
}

#[test]
fn test_computer_completes_or_blocks_five() {
    let four = [
        (0, 0, Stone::Black),
        (0, 1, Stone::Black),
        (0, 2, Stone::Black),
        (0, 3, Stone::Black),
        (9, 9, Stone::White),
        (15, 4, Stone::White),
    ];

    // Computer owns the four
    let mut controller = midgame(Stone::White, Stone::Black, &four);
    let (decision, report) = controller.play_computer().unwrap();
    assert_eq!(decision.best_move, Pos::new(0, 4));
    assert_eq!(decision.reason, MoveReason::CompleteFive);
    assert!(report.ends_round());
    assert_eq!(controller.state().winner(), Some(PlayerKind::Computer));

    // Computer faces the four
    let mut controller = midgame(Stone::Black, Stone::White, &four);
    let (decision, report) = controller.play_computer().unwrap();
    assert_eq!(decision.best_move, Pos::new(0, 4));
    assert_eq!(decision.reason, MoveReason::BlockFive);
    assert!(!report.ends_round());
    assert_eq!(controller.active_kind(), PlayerKind::Human);
}

#[test]
fn test_full_board_is_a_draw() {
    // Runs of three along rows, alternating every row
    let colour_at = |pos: Pos| {
        if (pos.col / 3 + pos.row) % 2 == 0 {
            Stone::White
        } else {
            Stone::Black
        }
    };
    let mut board = Board::new();
    for pos in Pos::all() {
        board.place_piece(pos, colour_at(pos)).unwrap();
    }
    let last = Pos::all()
        .find(|&pos| {
            let mut scratch = board.clone();
            let stone = scratch.remove_piece(pos).unwrap();
            score_at(&scratch, pos, stone) == 0 && count_captures(&scratch, pos, stone) == 0
        })
        .expect("a quiet cell");
    let colour = board.remove_piece(last).unwrap();

    let mut state = MatchState::new(colour);
    state.board = board;
    state.active = colour;
    for player in &mut state.players {
        player.total_moves = 100;
    }
    let mut controller = TurnController::from_state(state, scripted(&[0]));

    let report = controller.play_human(last).unwrap();
    assert_eq!(report.events.last(), Some(&GameEvent::RoundDrawn));
    assert_eq!(controller.phase(), Phase::RoundDrawn);
    assert_eq!(controller.state().board.count(Stone::Empty), 0);
    assert_eq!(
        controller.state().board.count(Stone::White) + controller.state().board.count(Stone::Black),
        TOTAL_CELLS
    );
}

#[test]
fn test_next_round_leader_takes_white() {
    let mut state = MatchState::new(Stone::Black);
    state.players[0].round_points = 5;
    state.players[0].capture_points = 1;
    state.players[1].round_points = 2;
    state.players[1].tournament_points = 3;
    state.board.place_piece(CENTER, Stone::White).unwrap();
    state.phase = Phase::RoundWon(PlayerKind::Human);
    let mut controller = TurnController::from_state(state, scripted(&[1]));

    let opener = controller.start_next_round().unwrap();
    assert_eq!(opener, PlayerKind::Human);

    let state = controller.state();
    assert_eq!(state.human().colour, Stone::White);
    assert_eq!(state.computer().colour, Stone::Black);
    assert_eq!(state.human().tournament_points, 6);
    assert_eq!(state.computer().tournament_points, 5);
    assert_eq!(state.human().round_points, 0);
    assert_eq!(state.computer().capture_points, 0);
    assert!(state.board.is_board_empty());
    assert_eq!(state.active, Stone::White);
    assert_eq!(controller.phase(), Phase::AwaitingMove);
}

#[test]
fn test_next_round_refused_mid_round() {
    let mut controller = TurnController::with_rng(Some(Stone::White), scripted(&[0]));
    controller.play_human(CENTER).unwrap();
    let before = controller.state().clone();

    assert_eq!(controller.start_next_round(), Err(MoveError::RoundInProgress));
    assert_eq!(controller.state(), &before);
}

#[test]
fn test_won_round_stays_won_after_load() {
    let mut controller = midgame(
        Stone::White,
        Stone::White,
        &[
            (2, 2, Stone::White),
            (2, 3, Stone::White),
            (2, 4, Stone::White),
            (2, 5, Stone::White),
            (8, 8, Stone::Black),
        ],
    );
    controller.play_human(Pos::new(2, 6)).unwrap();
    let saved = controller.snapshot();

    let mut loaded = TurnController::with_rng(Some(Stone::Black), scripted(&[0]));
    loaded.load(&saved).unwrap();
    assert_eq!(loaded.phase(), Phase::RoundWon(PlayerKind::Human));
    assert!(loaded.is_round_over());
    assert_eq!(loaded.play_human(Pos::new(17, 17)), Err(MoveError::RoundOver));

    // The same holds through the text form
    let text = saved.to_string();
    let mut reread = TurnController::with_rng(Some(Stone::Black), scripted(&[0]));
    reread.load(&text.parse().unwrap()).unwrap();
    assert_eq!(reread.state().winner(), Some(PlayerKind::Human));
    assert_eq!(reread.start_next_round(), Ok(PlayerKind::Human));
}

#[test]
fn test_capture_win_stays_won_after_load() {
    let mut state = MatchState::new(Stone::Black);
    state.board.place_piece(Pos::new(10, 1), Stone::Black).unwrap();
    state.board.place_piece(Pos::new(10, 2), Stone::White).unwrap();
    state.board.place_piece(Pos::new(10, 3), Stone::White).unwrap();
    state.players[0].capture_points = 4;
    state.players[0].total_moves = 4;
    state.players[1].total_moves = 4;
    state.active = Stone::Black;
    let mut controller = TurnController::from_state(state, scripted(&[0]));
    controller.play_human(Pos::new(10, 4)).unwrap();
    assert_eq!(controller.phase(), Phase::RoundWon(PlayerKind::Human));

    let mut loaded = TurnController::with_rng(Some(Stone::White), scripted(&[0]));
    loaded.load(&controller.snapshot()).unwrap();
    assert_eq!(loaded.phase(), Phase::RoundWon(PlayerKind::Human));
    assert_eq!(loaded.play_human(Pos::new(0, 0)), Err(MoveError::RoundOver));
}

#[test]
fn test_next_round_tie_goes_to_coin_toss() {
    let mut state = MatchState::new(Stone::White);
    state.phase = Phase::RoundDrawn;
    let mut controller = TurnController::from_state(state, scripted(&[3]));
    // Odd draw is tails: the computer opens
    assert_eq!(controller.start_next_round(), Ok(PlayerKind::Computer));
    assert_eq!(controller.state().computer().colour, Stone::White);
    assert_eq!(controller.active_kind(), PlayerKind::Computer);
}

#[test]
fn test_tournament_result() {
    let mut state = MatchState::new(Stone::White);
    state.players[0].tournament_points = 4;
    state.players[0].round_points = 1;
    state.players[1].capture_points = 2;
    state.players[1].tournament_points = 3;
    let controller = TurnController::from_state(state.clone(), scripted(&[0]));
    assert_eq!(controller.tournament_result(), TournamentResult::Draw { total: 5 });

    state.players[1].round_points = 1;
    let controller = TurnController::from_state(state, scripted(&[0]));
    assert_eq!(
        controller.tournament_result(),
        TournamentResult::Winner {
            kind: PlayerKind::Computer,
            total: 6
        }
    );
    assert_eq!(
        controller.tournament_result().to_string(),
        "Computer won the tournament with 6 point(s)"
    );
}

#[test]
fn test_hint_for_human_only() {
    let mut controller = TurnController::with_rng(Some(Stone::White), scripted(&[0]));
    let hint = controller.suggest_move().unwrap();
    assert_eq!(hint.best_move, CENTER);
    assert!(controller.state().board.is_board_empty());

    controller.play_human(CENTER).unwrap();
    assert_eq!(controller.suggest_move(), Err(MoveError::NotYourTurn));
}

#[test]
fn test_failed_load_keeps_match() {
    let mut controller = TurnController::with_rng(Some(Stone::White), scripted(&[0, 0]));
    controller.play_human(CENTER).unwrap();
    controller.play_computer().unwrap();
    let before = controller.state().clone();

    let mut broken = controller.snapshot();
    broken.grid[3].push('W');
    assert_eq!(
        controller.load(&broken),
        Err(SnapshotError::RowLength { row: 3, len: 20 })
    );
    assert_eq!(controller.state(), &before);

    // A good snapshot replaces the match
    let saved = controller.snapshot();
    let mut other = TurnController::with_rng(Some(Stone::Black), scripted(&[0]));
    other.load(&saved).unwrap();
    assert_eq!(other.state().board, before.board);
    assert_eq!(other.state().human().colour, Stone::White);
    assert_eq!(other.state().human().total_moves, 1);
    assert_eq!(other.active_kind(), PlayerKind::Human);
}

#[test]
fn test_self_play_keeps_board_consistent() {
    let config = MatchConfig {
        human_colour: Some(Stone::White),
        seed: Some(7),
    };
    let mut controller = TurnController::new(config);
    for _ in 0..1000 {
        if controller.is_round_over() {
            break;
        }
        match controller.active_kind() {
            PlayerKind::Human => {
                let hint = controller.suggest_move().unwrap();
                controller.play_human(hint.best_move).unwrap();
            }
            PlayerKind::Computer => {
                controller.play_computer().unwrap();
            }
        }
        let board = &controller.state().board;
        assert_eq!(
            board.count(Stone::White) + board.count(Stone::Black) + board.count(Stone::Empty),
            TOTAL_CELLS
        );
    }
    if let Some(winner) = controller.state().winner() {
        let player = controller.state().player(winner);
        assert!(player.capture_points >= 5 || player.round_points >= 5);
    }
}

#[test]
fn test_config_parse() {
    let config = MatchConfig::parse(Some("42"), Some("Black"));
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.human_colour, Some(Stone::Black));

    let config = MatchConfig::parse(Some("forty"), Some("green"));
    assert_eq!(config, MatchConfig::default());
}
