//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use tictactoe_engine::Strategy;

/// Tic-tac-toe against a minimax computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer on the console
    Play {
        /// Computer strategy: minimax, alpha-beta, randomized or random
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Let the human make the opening move
        #[arg(long)]
        human_first: bool,

        /// Seed for the randomized strategies
        #[arg(long)]
        seed: Option<u64>,

        /// Path to the configuration file
        #[arg(short, long, default_value = tictactoe_minimax::DEFAULT_CONFIG_PATH)]
        config: std::path::PathBuf,
    },

    /// Pit two computer strategies against each other
    Duel {
        /// Strategy of the player moving first
        #[arg(long, default_value = "alpha-beta")]
        first: Strategy,

        /// Strategy of the player moving second
        #[arg(long, default_value = "random")]
        second: Strategy,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for the randomized strategies
        #[arg(long)]
        seed: Option<u64>,

        /// Print every game
        #[arg(short, long)]
        verbose: bool,
    },
}
