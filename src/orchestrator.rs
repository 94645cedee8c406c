//! Game orchestration between players.

use crate::players::{ComputerPlayer, Player};
use anyhow::Result;
use std::io::Write;
use tictactoe_engine::{GameState, Mark, Move, Outcome, Strategy};
use tracing::{debug, info, instrument, warn};

/// What happened in a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    /// How the game ended.
    pub outcome: Outcome,
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// Name of the winning player, if any.
    pub winner: Option<String>,
}

/// Runs one game between two players, rendering every move to `out`.
pub struct Orchestrator<W> {
    state: GameState,
    player_a: Box<dyn Player>,
    player_b: Box<dyn Player>,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates an orchestrator. `player_a` moves first.
    pub fn new(player_a: Box<dyn Player>, player_b: Box<dyn Player>, out: W) -> Self {
        Self {
            state: GameState::new(),
            player_a,
            player_b,
            out,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the orchestrator, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays until the game is over.
    #[instrument(skip(self), fields(player_a = %self.player_a.name(), player_b = %self.player_b.name()))]
    pub fn run(&mut self) -> Result<GameReport> {
        info!("Starting game");
        let mut moves = Vec::new();

        while !self.state.is_terminal() {
            let mark = self.state.to_move();
            let player = match mark {
                Mark::PlayerB => &mut self.player_b,
                _ => &mut self.player_a,
            };

            debug!(player = %player.name(), "Waiting for move");
            let mv = player.choose_move(&self.state, &mut self.out)?;
            if let Err(err) = self.state.apply(mv) {
                // Players choose from available moves, so this is a player bug.
                warn!(player = %player.name(), %err, "Player chose an illegal move");
                return Err(err.into());
            }
            moves.push(mv);

            writeln!(self.out, "\n{} ({}) plays {}", player.name(), mark, mv)?;
            self.render()?;
        }

        let report = self.report(moves);
        match &report.winner {
            Some(name) => writeln!(self.out, "{} wins!", name)?,
            None => writeln!(self.out, "It's a draw!")?,
        }
        info!(outcome = ?report.outcome, moves = report.moves.len(), "Game over");
        Ok(report)
    }

    /// Writes the board and the current score.
    fn render(&mut self) -> Result<()> {
        write!(self.out, "{}", self.state)?;
        writeln!(self.out, "Current score: {}", self.state.score())?;
        Ok(())
    }

    fn report(&self, moves: Vec<Move>) -> GameReport {
        let outcome = self.state.outcome().unwrap_or(Outcome::Draw);
        let winner = match outcome {
            Outcome::Win(Mark::PlayerA) => Some(self.player_a.name().to_string()),
            Outcome::Win(_) => Some(self.player_b.name().to_string()),
            Outcome::Draw => None,
        };
        GameReport {
            outcome,
            moves,
            winner,
        }
    }
}

/// Tally of a series of games between two fixed seats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuelSummary {
    /// Games won by the player moving first.
    pub first_wins: u32,
    /// Games won by the player moving second.
    pub second_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl DuelSummary {
    /// Adds one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::PlayerA) => self.first_wins += 1,
            Outcome::Win(_) => self.second_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Number of games recorded.
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }
}

impl std::fmt::Display for DuelSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: first player won {}, second player won {}, {} drawn",
            self.games(),
            self.first_wins,
            self.second_wins,
            self.draws
        )
    }
}

/// Plays `games` computer-vs-computer games, `first` always moving first.
///
/// Each game is rendered to `out`; pass [`std::io::sink`] to play silently.
/// With a seed, every game gets its own derived seeds so the series is
/// reproducible.
#[instrument(skip(out))]
pub fn run_duel<W: Write>(
    first: Strategy,
    second: Strategy,
    games: u32,
    seed: Option<u64>,
    out: &mut W,
) -> Result<DuelSummary> {
    let mut summary = DuelSummary::default();
    for game in 0..games {
        let seed_for = |seat: u64| seed.map(|s| s.wrapping_add(2 * u64::from(game) + seat));
        let mut orchestrator = Orchestrator::new(
            Box::new(ComputerPlayer::new(format!("{} (first)", first), first, seed_for(0))),
            Box::new(ComputerPlayer::new(format!("{} (second)", second), second, seed_for(1))),
            &mut *out,
        );
        let report = orchestrator.run()?;
        summary.record(report.outcome);
        debug!(game, outcome = ?report.outcome, "Duel game finished");
    }
    info!(%summary, "Duel finished");
    Ok(summary)
}
