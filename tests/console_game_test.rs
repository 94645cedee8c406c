//! Scripted console games driven through the public API.

use std::io::Cursor;
use tictactoe_engine::{Mark, Move, Outcome, Strategy};
use tictactoe_minimax::{ComputerPlayer, HumanPlayer, Orchestrator, run_duel};

/// A human who types 1, 2, 3, ... and so ends up taking the lowest free cell.
fn counting_human() -> HumanPlayer<Cursor<&'static str>> {
    HumanPlayer::new("You", Cursor::new("1\n2\n3\n4\n5\n6\n7\n8\n9\n"))
}

fn positions(moves: &[Move]) -> Vec<usize> {
    moves.iter().map(|m| m.position()).collect()
}

#[test]
fn test_computer_first_beats_naive_human() {
    let mut orchestrator = Orchestrator::new(
        Box::new(ComputerPlayer::new("Computer", Strategy::AlphaBeta, Some(0))),
        Box::new(counting_human()),
        Vec::new(),
    );
    let report = orchestrator.run().unwrap();

    assert_eq!(positions(&report.moves), vec![1, 2, 4, 3, 5, 6, 7]);
    assert_eq!(report.outcome, Outcome::Win(Mark::PlayerA));
    assert_eq!(report.winner.as_deref(), Some("Computer"));
    assert_eq!(orchestrator.state().score(), 1);

    let transcript = String::from_utf8(orchestrator.into_output()).unwrap();
    assert!(transcript.contains("Enter the position for X (available: [2, 3, 4, 5, 6, 7, 8, 9]): "));
    assert!(transcript.contains("position 1 is already occupied"));
    assert!(transcript.contains("Computer (O) plays 7"));
    assert!(transcript.contains("Current score: 1"));
    assert!(transcript.trim_end().ends_with("Computer wins!"));
}

#[test]
fn test_human_first_loses_to_search() {
    let mut orchestrator = Orchestrator::new(
        Box::new(counting_human()),
        Box::new(ComputerPlayer::new("Computer", Strategy::Minimax, Some(0))),
        Vec::new(),
    );
    let report = orchestrator.run().unwrap();

    assert_eq!(positions(&report.moves), vec![1, 5, 2, 3, 4, 7]);
    assert_eq!(report.outcome, Outcome::Win(Mark::PlayerB));
    assert_eq!(orchestrator.state().score(), -1);

    let transcript = String::from_utf8(orchestrator.into_output()).unwrap();
    assert!(transcript.contains("| O | O | X |"));
    assert!(transcript.contains("Current score: -1"));
}

#[test]
fn test_both_search_variants_draw() {
    let mut orchestrator = Orchestrator::new(
        Box::new(ComputerPlayer::new("Minimax", Strategy::Minimax, None)),
        Box::new(ComputerPlayer::new("Alpha-beta", Strategy::AlphaBeta, None)),
        std::io::sink(),
    );
    let report = orchestrator.run().unwrap();
    assert_eq!(positions(&report.moves), vec![1, 5, 2, 3, 7, 4, 6, 8, 9]);
    assert_eq!(report.outcome, Outcome::Draw);
}

#[test]
fn test_duel_is_reproducible_with_seed() {
    let run = || {
        run_duel(Strategy::Randomized, Strategy::Random, 20, Some(99), &mut std::io::sink())
            .unwrap()
    };
    let first = run();
    assert_eq!(first, run());
    assert_eq!(first.games(), 20);
}

#[test]
fn test_search_duel_always_draws() {
    let summary =
        run_duel(Strategy::AlphaBeta, Strategy::Minimax, 3, None, &mut std::io::sink()).unwrap();
    assert_eq!(summary.draws, 3);
}
