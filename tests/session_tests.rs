//! Session integration tests.
//!
//! These tests drive a [`Session`] through the selection protocol on
//! prepared boards, so the trigger of each move is known exactly. Refills
//! come from a seeded RNG and may add chain reactions, so cascade totals
//! are checked as lower bounds.

use match3_engine::board::Board;
use match3_engine::chain::{Axis, ChainDetector};
use match3_engine::core::{EngineConfig, EngineError, GameRng, Position};
use match3_engine::session::{
    GameOverReason, GameSummary, Rejection, SelectionOutcome, SelectionState, Session,
};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Diagonal stripes of four styles. No swap on this board forms a chain.
fn stripes() -> [[u8; 8]; 8] {
    let mut rows = [[0u8; 8]; 8];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = ((r + c) % 4) as u8;
        }
    }
    rows
}

/// Row 2 reads `5 5 0 5 ...`; swapping (2, 2) and (2, 3) completes three 5s.
fn simple_match_board() -> Board {
    let mut rows = stripes();
    rows[2][0] = 5;
    rows[2][1] = 5;
    rows[2][3] = 5;
    Board::from_styles(&rows)
}

/// Swapping (6, 2) up into (5, 2) completes three 4s on row 5. The 5s at
/// (4, 1) and (4, 2) then fall next to the 5 at (5, 3) and clear again.
fn cascade_board() -> Board {
    let mut rows = stripes();
    rows[5][0] = 4;
    rows[5][1] = 4;
    rows[6][2] = 4;
    rows[5][3] = 5;
    rows[4][1] = 5;
    rows[4][2] = 5;
    Board::from_styles(&rows)
}

/// Route engine logs to the test harness. Set `RUST_LOG=debug` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Swapping (5, 3) and (5, 4) completes three 4s on row 5. The 5s at
/// (3, 3) and (4, 3) then drop onto the 5 at (6, 3), forming a column.
fn vertical_cascade_board() -> Board {
    let mut rows = stripes();
    rows[5][1] = 4;
    rows[5][2] = 4;
    rows[5][4] = 4;
    rows[3][3] = 5;
    rows[4][3] = 5;
    rows[6][3] = 5;
    Board::from_styles(&rows)
}

/// Stripes with one move: swapping (0, 2) and (1, 2) completes three 2s on
/// row 1. Shifting the cleared columns down often leaves no move at all.
fn last_move_board() -> Board {
    let mut rows = stripes();
    rows[1][0] = 2;
    Board::from_styles(&rows)
}

fn session_on(board: Board, config: EngineConfig) -> Session {
    init_tracing();
    Session::with_board(config, board, GameRng::new(2024)).unwrap()
}

/// Select two cells and return the second outcome.
fn play(session: &mut Session, first: Position, second: Position) -> SelectionOutcome {
    assert_eq!(
        session.attempt_select(first).unwrap(),
        SelectionOutcome::FirstSelected(first)
    );
    session.attempt_select(second).unwrap()
}

// =============================================================================
// Accepted Moves
// =============================================================================

/// Test that a simple three-in-a-row swap is scored and charged one move.
#[test]
fn test_simple_match() {
    let mut session = session_on(simple_match_board(), EngineConfig::default());

    let SelectionOutcome::Resolved(result) = play(&mut session, pos(2, 2), pos(2, 3)) else {
        panic!("expected the swap to resolve");
    };

    assert_eq!(result.trigger_chain_length, 3);
    assert_eq!(session.score(), 3 + result.cascade_chain_length);
    assert_eq!(result.score_after, session.score());
    assert_eq!(session.moves_remaining(), 19);
    assert_eq!(result.moves_remaining_after, 19);
    assert_eq!(session.selection(), SelectionState::AwaitingFirstSelection);

    let mut cleared = result.passes[0].cleared.clone();
    cleared.sort();
    assert_eq!(cleared, vec![pos(2, 0), pos(2, 1), pos(2, 2)]);
}

/// Test that tiles above a cleared run fall and the top row is refilled.
#[test]
fn test_trigger_gravity_events() {
    let mut session = session_on(simple_match_board(), EngineConfig::default());

    let SelectionOutcome::Resolved(result) = play(&mut session, pos(2, 2), pos(2, 3)) else {
        panic!("expected the swap to resolve");
    };

    let trigger = &result.passes[0];
    // Rows 0 and 1 of columns 0..3 each drop one cell.
    assert_eq!(trigger.falls.len(), 6);
    assert!(trigger.falls.iter().all(|f| f.to_row == f.from_row + 1 && f.col < 3));
    assert_eq!(trigger.refills.len(), 3);
    assert!(trigger.refills.iter().all(|r| r.position.row == 0));

    assert!(!session.board().has_empty());
}

/// Test that falling tiles set off a chain reaction that is scored.
#[test]
fn test_cascade_scores() {
    let mut session = session_on(cascade_board(), EngineConfig::default());

    let SelectionOutcome::Resolved(result) = play(&mut session, pos(6, 2), pos(5, 2)) else {
        panic!("expected the swap to resolve");
    };

    assert_eq!(result.trigger_chain_length, 3);
    assert!(result.had_chain_reaction());
    assert!(result.cascade_chain_length >= 3);
    assert!(result.passes[1].cleared.contains(&pos(5, 3)));
    assert_eq!(
        session.score(),
        result.trigger_chain_length + result.cascade_chain_length
    );
    assert_eq!(session.moves_remaining(), 19);
}

/// Test that tiles falling into a column form a vertical chain reaction.
#[test]
fn test_vertical_cascade() {
    let mut session = session_on(vertical_cascade_board(), EngineConfig::default());

    let SelectionOutcome::Resolved(result) = play(&mut session, pos(5, 3), pos(5, 4)) else {
        panic!("expected the swap to resolve");
    };

    assert_eq!(result.trigger_chain_length, 3);
    assert!(result.had_chain_reaction());

    let reaction = &result.passes[1];
    assert!(reaction
        .runs
        .iter()
        .any(|r| r.axis == Axis::Vertical && r.start == pos(4, 3) && r.len == 3));
    for cell in [pos(4, 3), pos(5, 3), pos(6, 3)] {
        assert!(reaction.cleared.contains(&cell));
    }
    assert!(result.cascade_chain_length >= 3);
    assert_eq!(
        session.score(),
        result.trigger_chain_length + result.cascade_chain_length
    );
}

/// Test that the board is full and chain-free after every accepted move.
#[test]
fn test_board_stable_after_move() {
    let mut session = session_on(cascade_board(), EngineConfig::default());
    play(&mut session, pos(6, 2), pos(5, 2));

    let detector = ChainDetector::new(3);
    assert!(!session.board().has_empty());
    assert!(!detector.has_chains(session.board()));
}

/// Test that move results serialize for a presentation layer.
#[test]
fn test_move_result_serializes() {
    let mut session = session_on(simple_match_board(), EngineConfig::default());
    let outcome = play(&mut session, pos(2, 2), pos(2, 3));

    let json = serde_json::to_value(&outcome).unwrap();
    let result = &json["Resolved"];
    assert_eq!(result["trigger_chain_length"], 3);
    assert_eq!(result["moves_remaining_after"], 19);
    assert_eq!(result["passes"][0]["refills"].as_array().unwrap().len(), 3);

    let back: SelectionOutcome = serde_json::from_value(json).unwrap();
    assert_eq!(back, outcome);
}

// =============================================================================
// Rejections and Cancels
// =============================================================================

/// Test that a swap forming no chain is undone and costs nothing.
#[test]
fn test_invalid_swap_rejected() {
    let mut session = session_on(simple_match_board(), EngineConfig::default());
    let before = session.board().clone();

    let outcome = play(&mut session, pos(0, 0), pos(0, 1));

    assert_eq!(outcome, SelectionOutcome::Rejected(Rejection::InvalidSwap));
    assert_eq!(session.board(), &before);
    assert_eq!(session.score(), 0);
    assert_eq!(session.moves_remaining(), 20);
    assert_eq!(session.selection(), SelectionState::AwaitingFirstSelection);
}

/// Test that non-adjacent cells are rejected without swapping.
#[test]
fn test_not_adjacent_rejected() {
    let mut session = session_on(simple_match_board(), EngineConfig::default());
    let before = session.board().clone();

    for second in [pos(2, 2), pos(1, 1), pos(0, 2)] {
        let outcome = play(&mut session, pos(0, 0), second);
        assert_eq!(outcome, SelectionOutcome::Rejected(Rejection::NotAdjacent));
    }

    assert_eq!(session.board(), &before);
    assert_eq!(session.moves_remaining(), 20);
}

/// Test that picking the selected cell again cancels the selection.
#[test]
fn test_reselect_cancels() {
    let mut session = session_on(simple_match_board(), EngineConfig::default());

    session.attempt_select(pos(2, 2)).unwrap();
    assert_eq!(
        session.attempt_select(pos(2, 2)).unwrap(),
        SelectionOutcome::Deselected(pos(2, 2))
    );

    // The next click starts a fresh selection rather than completing a swap.
    assert_eq!(
        session.attempt_select(pos(2, 3)).unwrap(),
        SelectionOutcome::FirstSelected(pos(2, 3))
    );
    assert_eq!(session.moves_remaining(), 20);
}

/// Test that an off-board selection errors and keeps the pending selection.
#[test]
fn test_out_of_bounds_keeps_selection() {
    let mut session = session_on(simple_match_board(), EngineConfig::default());

    session.attempt_select(pos(2, 2)).unwrap();
    let err = session.attempt_select(pos(2, 8)).unwrap_err();

    assert!(matches!(err, EngineError::OutOfBounds { rows: 8, cols: 8, .. }));
    assert_eq!(session.selection().selected(), Some(pos(2, 2)));
}

// =============================================================================
// Game Over
// =============================================================================

/// Test that the last allotted move ends the game.
#[test]
fn test_out_of_moves() {
    let config = EngineConfig::default().with_moves(1);
    let mut session = session_on(simple_match_board(), config);

    play(&mut session, pos(2, 2), pos(2, 3));

    let over = session.is_game_over().unwrap();
    assert_eq!(over.reason, GameOverReason::OutOfMoves);
    assert_eq!(over.moves_used, 1);
    assert_eq!(over.score, session.score());
    assert_eq!(session.moves_remaining(), 0);
}

/// Test that a board with no legal move is over before the first click.
#[test]
fn test_stalemate_at_start() {
    let mut session = session_on(Board::from_styles(&stripes()), EngineConfig::default());

    let over = session.is_game_over().unwrap();
    assert_eq!(over.reason, GameOverReason::NoLegalMove);
    assert_eq!(over.moves_used, 0);
    assert_eq!(session.request_hint(), None);
}

/// Test that a move leaving no legal swap ends the game right away.
///
/// Refills are random, so seeds are tried until one leaves a dead board.
#[test]
fn test_stalemate_after_move() {
    let mut stalled = None;

    for seed in 0..64 {
        let mut session =
            Session::with_board(EngineConfig::default(), last_move_board(), GameRng::new(seed))
                .unwrap();
        assert!(session.is_game_over().is_none());

        let outcome = play(&mut session, pos(0, 2), pos(1, 2));
        assert!(matches!(outcome, SelectionOutcome::Resolved(_)));

        if session.is_game_over().is_some() {
            stalled = Some(session);
            break;
        }
        assert!(session.request_hint().is_some());
    }

    let mut session = stalled.expect("no seed in 0..64 left a dead board");
    let over = session.is_game_over().unwrap();
    assert_eq!(over.reason, GameOverReason::NoLegalMove);
    assert_eq!(over.moves_used, 1);
    assert_eq!(over.score, session.score());
    assert_eq!(session.moves_remaining(), 19);
    assert_eq!(session.request_hint(), None);
    assert_eq!(session.attempt_select(pos(0, 0)), Err(EngineError::GameOver));
}

/// Test that selections are refused once the game is over.
#[test]
fn test_no_selection_after_game_over() {
    let config = EngineConfig::default().with_moves(1);
    let mut session = session_on(simple_match_board(), config);
    play(&mut session, pos(2, 2), pos(2, 3));

    let before = session.board().clone();
    assert_eq!(session.attempt_select(pos(0, 0)), Err(EngineError::GameOver));
    assert_eq!(session.board(), &before);
}

/// Test that ending early reports the score and moves so far.
#[test]
fn test_end_early_after_a_move() {
    let mut session = session_on(simple_match_board(), EngineConfig::default());
    play(&mut session, pos(2, 2), pos(2, 3));
    let score = session.score();

    assert_eq!(
        session.end_game_early(),
        GameSummary {
            score,
            moves_used: 1
        }
    );
    assert_eq!(
        session.is_game_over().map(|o| o.reason),
        Some(GameOverReason::EndedEarly)
    );
}

// =============================================================================
// Setup and Determinism
// =============================================================================

/// Test that a prepared board with chains is settled without scoring.
#[test]
fn test_prepared_chains_settled_unscored() {
    let mut rows = stripes();
    rows[0][0] = 6;
    rows[0][1] = 6;
    rows[0][2] = 6;
    let session = session_on(Board::from_styles(&rows), EngineConfig::default());

    assert_eq!(session.score(), 0);
    assert_eq!(session.moves_remaining(), 20);
    assert!(!session.board().has_empty());
    assert!(!ChainDetector::new(3).has_chains(session.board()));
}

/// Test that the same seed and selections replay the same game.
#[test]
fn test_seeded_replay() {
    let config = EngineConfig::default();
    let mut a = Session::from_seed(config.clone(), 77).unwrap();
    let mut b = Session::from_seed(config, 77).unwrap();
    assert_eq!(a.board(), b.board());

    for _ in 0..5 {
        if a.is_game_over().is_some() {
            break;
        }
        let from = a.request_hint().unwrap();
        assert_eq!(b.request_hint(), Some(from));

        let neighbours = from.neighbors(a.board().rows(), a.board().cols());
        for to in neighbours {
            let ra = play(&mut a, from, to);
            let rb = play(&mut b, from, to);
            assert_eq!(ra, rb);
            if matches!(ra, SelectionOutcome::Resolved(_)) {
                break;
            }
        }
        assert_eq!(a.board(), b.board());
        assert_eq!(a.score(), b.score());
    }
}

/// Test that a configuration loaded from TOML drives the session.
#[test]
fn test_session_from_toml_config() {
    let config = EngineConfig::from_toml_str(
        r#"
        rows = 6
        cols = 5
        num_styles = 5
        moves_allotted = 3
        "#,
    )
    .unwrap();
    let session = Session::from_seed(config, 5).unwrap();

    assert_eq!(session.board().rows(), 6);
    assert_eq!(session.board().cols(), 5);
    assert_eq!(session.moves_remaining(), 3);
    assert_eq!(session.config().min_chain_length, 3);
}
