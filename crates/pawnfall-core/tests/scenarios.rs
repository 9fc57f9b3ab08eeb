//! Game scenarios played through the command interface.
//!
//! Covers the en passant window, double-step gating, captures, and the
//! three ways a game can end.

use pawnfall_core::{Color, GameState, MoveError, Outcome, Position, Signal, new_game};

/// Play a sequence of commands, asserting each one is accepted.
fn play_all(state: &mut GameState, commands: &[&str]) {
    for cmd in commands {
        let signal = state.submit_command(cmd);
        assert!(
            !matches!(signal, Signal::Rejected(_)),
            "{cmd} was rejected: {signal:?}"
        );
    }
}

fn assert_invalid(signal: Signal) {
    assert!(
        matches!(signal, Signal::Rejected(MoveError::InvalidMove { .. })),
        "expected InvalidMove, got {signal:?}"
    );
}

// ── Captures ──────────────────────────────────────────────────────────────────

#[test]
fn capture_onto_occupied_square_is_standard() {
    let mut state = new_game();
    play_all(&mut state, &["e2e4"]);
    assert_eq!(state.en_passant().map(|p| p.position()), Some(Position::E4));

    play_all(&mut state, &["d7d5"]);
    assert_eq!(state.en_passant().map(|p| p.position()), Some(Position::D5));

    assert_eq!(state.submit_command("e4d5"), Signal::Continuing);
    assert_eq!(state.board().count(Color::Black), 7);
    assert_eq!(
        state.board().pawn_at(Position::D5).map(|p| p.color()),
        Some(Color::White)
    );
    assert!(state.board().pawn_at(Position::E4).is_none());
    assert!(state.en_passant().is_none());
}

#[test]
fn en_passant_immediately_after_double_step() {
    let mut state = new_game();
    play_all(&mut state, &["a2a3", "d7d5", "a3a4", "d5d4", "e2e4"]);

    assert_eq!(state.submit_command("d4e3"), Signal::Continuing);
    assert!(state.board().pawn_at(Position::E4).is_none(), "white e-pawn captured");
    assert!(state.board().pawn_at(Position::D4).is_none());
    assert_eq!(
        state.board().pawn_at(Position::E3).map(|p| p.color()),
        Some(Color::Black)
    );
    assert_eq!(state.board().count(Color::White), 7);
    assert!(state.en_passant().is_none());
}

#[test]
fn en_passant_window_closes_after_one_reply() {
    let mut state = new_game();
    play_all(&mut state, &["a2a3", "d7d5", "a3a4", "d5d4", "e2e4", "a7a6", "a4a5"]);
    assert_invalid(state.submit_command("d4e3"));
}

#[test]
fn en_passant_requires_the_double_stepped_pawn() {
    // The white pawn arrives beside d4 with a single step from e3.
    let mut state = new_game();
    play_all(&mut state, &["e2e3", "d7d5", "h2h3", "d5d4", "e3e4"]);
    assert!(state.en_passant().is_none());
    assert_invalid(state.submit_command("d4e3"));
    assert!(state.board().pawn_at(Position::E4).is_some());
}

#[test]
fn eligibility_follows_the_pawn_not_the_square() {
    let mut state: GameState = "8/8/8/8/3p4/8/4P3/8 w -".parse().unwrap();
    play_all(&mut state, &["e2e4"]);
    let eligible = state.en_passant_id();
    assert!(eligible.is_some());
    assert_eq!(state.board().pawn_at(Position::E4).map(|p| p.id()), eligible);
    assert_eq!(state.submit_command("d4e3"), Signal::Won(Color::Black));
}

// ── Straight moves ────────────────────────────────────────────────────────────

#[test]
fn double_step_only_from_starting_rank() {
    let mut state = new_game();
    play_all(&mut state, &["c2c3", "h7h6"]);
    assert_invalid(state.submit_command("c3c5"));
    assert!(state.board().pawn_at(Position::C5).is_none());
}

#[test]
fn straight_moves_never_capture() {
    let mut state = new_game();
    play_all(&mut state, &["e2e4", "e7e5"]);
    assert_invalid(state.submit_command("e4e5"));
}

#[test]
fn wrong_color_is_no_pawn_at_source() {
    let mut state = new_game();
    play_all(&mut state, &["e2e4"]);
    assert_eq!(
        state.submit_command("e4e5"),
        Signal::Rejected(MoveError::NoPawnAtSource {
            color: Color::Black,
            position: Position::E4,
            occupant: Some(Color::White),
        })
    );
}

// ── Rejection ─────────────────────────────────────────────────────────────────

#[test]
fn rejection_is_idempotent() {
    let mut state = new_game();
    play_all(&mut state, &["e2e4", "d7d5"]);
    let before = state.clone();

    for cmd in ["e4e6", "e4e4", "d2d2", "xyz", "e4 d5", "a1a2"] {
        let first = state.submit_command(cmd);
        assert!(matches!(first, Signal::Rejected(_)), "{cmd}");
        assert_eq!(state, before);
        let second = state.submit_command(cmd);
        assert_eq!(first, second);
        assert_eq!(state, before);
    }
    assert_eq!(state.side_to_move(), Color::White);
}

// ── Game end ──────────────────────────────────────────────────────────────────

#[test]
fn reaching_last_rank_wins_and_freezes_state() {
    let mut state: GameState = "8/2P5/8/8/8/8/5p2/8 w -".parse().unwrap();
    assert_eq!(state.submit_command("c7c8"), Signal::Won(Color::White));
    assert_eq!(state.outcome(), Outcome::Won(Color::White));

    let frozen = state.clone();
    assert_eq!(
        state.submit_command("f2f1"),
        Signal::Rejected(MoveError::GameOver)
    );
    assert_eq!(state.submit_command("c8c7"), Signal::Rejected(MoveError::GameOver));
    assert_eq!(state, frozen);
}

#[test]
fn black_wins_on_rank_one() {
    let mut state: GameState = "8/8/8/8/8/P7/5p2/8 b -".parse().unwrap();
    assert_eq!(state.submit_command("f2f1"), Signal::Won(Color::Black));
}

#[test]
fn capturing_the_last_pawn_wins() {
    let mut state: GameState = "8/8/8/8/2p5/1P6/8/8 b -".parse().unwrap();
    assert_eq!(state.submit_command("c4b3"), Signal::Won(Color::Black));
    assert_eq!(state.board().count(Color::White), 0);
}

#[test]
fn lone_blocked_pawn_is_stalemated() {
    // Black's only pawn has moved, is blocked, and has nothing to capture.
    let mut state: GameState = "8/8/8/3p4/8/3P4/7P/8 w -".parse().unwrap();
    assert_eq!(state.submit_command("d3d4"), Signal::Stalemated);
    assert_eq!(state.outcome(), Outcome::Stalemate);
    assert_eq!(state.side_to_move(), Color::Black);
}

#[test]
fn no_stalemate_when_en_passant_is_available() {
    // After g2g4 Black's blocked f-pawn can still take en passant.
    let mut state: GameState = "8/8/8/8/5p2/5P2/6P1/8 w -".parse().unwrap();
    assert_eq!(state.submit_command("g2g4"), Signal::Continuing);
    assert_eq!(state.submit_command("f4g3"), Signal::Continuing);
}

#[test]
fn no_stalemate_while_a_capture_exists() {
    // d3d4 blocks the d-pawn, but it can still take on e4.
    let mut state: GameState = "8/8/8/3p4/4P3/3P4/8/8 w -".parse().unwrap();
    assert_eq!(state.submit_command("d3d4"), Signal::Continuing);
    assert_eq!(state.submit_command("d5e4"), Signal::Continuing);
}
