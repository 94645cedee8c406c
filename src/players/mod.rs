//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use std::io::Write;
use tictactoe_engine::{GameState, Move};

/// Anything that can pick a move for the side to move.
pub trait Player {
    /// Picks the next move.
    ///
    /// `out` is the console the game is rendered to, for players that need
    /// to prompt.
    fn choose_move(&mut self, state: &GameState, out: &mut dyn Write) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
