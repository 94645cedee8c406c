//! Tic-tac-toe - console game against a minimax computer opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_engine::{Mark, Strategy};
use tictactoe_minimax::{ComputerPlayer, GameConfig, HumanPlayer, Orchestrator, Player, run_duel};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,tictactoe_minimax=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            strategy,
            human_first,
            seed,
            config,
        } => run_play(&config, strategy, human_first, seed),
        Command::Duel {
            first,
            second,
            games,
            seed,
            verbose,
        } => run_duel_command(first, second, games, seed, verbose),
    }
}

/// Run a human-vs-computer game on the console
#[instrument(skip(config_path), fields(config_path = %config_path.display()))]
fn run_play(
    config_path: &Path,
    strategy: Option<Strategy>,
    human_first: bool,
    seed: Option<u64>,
) -> Result<()> {
    let config =
        GameConfig::load_or_default(config_path)?.with_overrides(strategy, human_first, seed);
    let computer = ComputerPlayer::new("Computer", *config.strategy(), *config.seed());
    info!(strategy = %computer.strategy(), computer_first = config.computer_first(), "Starting console game");

    let computer: Box<dyn Player> = Box::new(computer);
    let human: Box<dyn Player> = Box::new(HumanPlayer::new("You", std::io::stdin().lock()));

    let (player_a, player_b, human_mark) = if *config.computer_first() {
        (computer, human, Mark::PlayerB)
    } else {
        (human, computer, Mark::PlayerA)
    };
    println!("You play {}. Positions are numbered 1-9, row by row.", human_mark);

    let mut orchestrator = Orchestrator::new(player_a, player_b, std::io::stdout());
    orchestrator.run()?;
    Ok(())
}

/// Run a series of computer-vs-computer games and print the tally
#[instrument]
fn run_duel_command(
    first: Strategy,
    second: Strategy,
    games: u32,
    seed: Option<u64>,
    verbose: bool,
) -> Result<()> {
    let summary = if verbose {
        run_duel(first, second, games, seed, &mut std::io::stdout())?
    } else {
        run_duel(first, second, games, seed, &mut std::io::sink())?
    };
    println!("{} vs {}: {}", first, second, summary);
    Ok(())
}
