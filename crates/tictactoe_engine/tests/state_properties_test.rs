//! Properties of the game state checked over every reachable position.

use std::collections::HashSet;
use tictactoe_engine::{CELLS, GameState, Mark, Move};

/// Visits every distinct state reachable by alternating legal play from an
/// empty board, stopping at terminal states.
fn for_each_reachable(mut visit: impl FnMut(&mut GameState)) {
    fn walk(
        state: &mut GameState,
        seen: &mut HashSet<GameState>,
        visit: &mut dyn FnMut(&mut GameState),
    ) {
        if !seen.insert(state.clone()) {
            return;
        }
        visit(state);
        for mv in state.available_moves() {
            state.apply(mv).unwrap();
            walk(state, seen, visit);
            state.undo(mv);
        }
    }

    let mut seen = HashSet::new();
    walk(&mut GameState::new(), &mut seen, &mut visit);
}

fn mv(p: usize) -> Move {
    Move::new(p).unwrap()
}

#[test]
fn test_reachable_state_count() {
    let mut count = 0;
    for_each_reachable(|_| count += 1);
    // Distinct tic-tac-toe positions reachable in legal play.
    assert_eq!(count, 5478);
}

#[test]
fn test_available_moves_plus_counter_is_nine() {
    for_each_reachable(|state| {
        if !state.is_terminal() {
            assert_eq!(state.available_moves().len() + state.moves_played(), CELLS);
        }
        assert_eq!(state.board().occupied(), state.moves_played());
    });
}

#[test]
fn test_apply_undo_round_trip() {
    for_each_reachable(|state| {
        let before = state.clone();
        for mv in before.available_moves() {
            state.apply(mv).unwrap();
            state.undo(mv);
            assert_eq!(*state, before);
            assert_eq!(state.to_move(), before.to_move());
            assert_eq!(state.moves_played(), before.moves_played());
            assert_eq!(state.is_terminal(), before.is_terminal());
            assert_eq!(state.score(), before.score());
        }
    });
}

#[test]
fn test_never_both_players_win() {
    for_each_reachable(|state| {
        let a = state.board().lines_owned_by(Mark::PlayerA);
        let b = state.board().lines_owned_by(Mark::PlayerB);
        assert!(a == 0 || b == 0, "both players own a line:\n{}", state);
    });
}

#[test]
fn test_derived_values_match_board() {
    for_each_reachable(|state| {
        // The cached score is taken from the side that just moved.
        let mover = state.to_move().opponent();
        let a = state.board().lines_owned_by(Mark::PlayerA) as i32;
        let b = state.board().lines_owned_by(Mark::PlayerB) as i32;
        let terminal = state.moves_played() == CELLS || a != 0 || b != 0;
        let score = if mover == Mark::PlayerA { a } else { -b };
        assert_eq!((state.is_terminal(), state.score()), (terminal, score));
    });
}

#[test]
fn test_evaluate_reports_side_to_move() {
    let mut state = GameState::new();
    for p in [1, 4, 2, 5, 3] {
        state.apply(Move::new(p).unwrap()).unwrap();
    }
    // PlayerA just won; with PlayerB to move only PlayerB's lines count.
    assert_eq!(state.score(), 1);
    assert_eq!(state.evaluate(), (true, 0));
}

#[test]
fn test_top_row_completion_scores_plus_one() {
    // O O _ / X X _ / _ _ _
    let mut state = GameState::new();
    for p in [1, 4, 2, 5] {
        state.apply(mv(p)).unwrap();
    }
    assert_eq!(state.to_move(), Mark::PlayerA);
    state.apply(mv(3)).unwrap();
    assert!(state.is_terminal());
    assert_eq!(state.score(), 1);
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let mut state = GameState::new();
    let sequence = [1, 2, 3, 5, 4, 6, 8, 7, 9];
    for (i, &p) in sequence.iter().enumerate() {
        assert!(!state.is_terminal(), "game ended early at move {}", i);
        state.apply(mv(p)).unwrap();
    }
    assert!(state.is_terminal());
    assert_eq!(state.score(), 0);
    assert_eq!(state.moves_played(), 9);
}

#[test]
fn test_moves_in_position_order_end_on_diagonal() {
    // Playing 1, 2, 3, ... gives PlayerA the 3-5-7 diagonal on move 7.
    let mut state = GameState::new();
    for p in 1..=7 {
        assert!(!state.is_terminal());
        state.apply(mv(p)).unwrap();
    }
    assert!(state.is_terminal());
    assert_eq!(state.score(), 1);
    assert!(state.available_moves().is_empty());
}

#[test]
fn test_occupied_cell_error_message() {
    let mut state = GameState::new();
    state.apply(mv(5)).unwrap();
    let err = state.apply(mv(5)).unwrap_err();
    assert!(err.to_string().contains("already occupied"));
}
