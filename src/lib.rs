//! Console tic-tac-toe against a minimax computer opponent.
//!
//! The game logic and search live in [`tictactoe_engine`]; this crate is the
//! driving loop around it.
//!
//! # Architecture
//!
//! - **Config**: optional TOML settings with command-line overrides
//! - **Players**: human console input and engine-backed computer players
//! - **Orchestrator**: the turn loop, board rendering and duel series
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_minimax::{ComputerPlayer, HumanPlayer, Orchestrator};
//! use tictactoe_engine::Strategy;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut orchestrator = Orchestrator::new(
//!     Box::new(ComputerPlayer::new("Computer", Strategy::AlphaBeta, None)),
//!     Box::new(HumanPlayer::new("You", std::io::stdin().lock())),
//!     std::io::stdout(),
//! );
//! orchestrator.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use orchestrator::{DuelSummary, GameReport, Orchestrator, run_duel};
pub use players::{ComputerPlayer, HumanPlayer, Player};
