//! Human player reading positions from a line-based console.

use super::Player;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tictactoe_engine::{GameError, GameState, Move};
use tracing::{debug, warn};

/// Human player typing positions 1-9.
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn choose_move(&mut self, state: &GameState, out: &mut dyn Write) -> Result<Move> {
        let available = state.available_moves();
        if available.is_empty() {
            return Err(GameError::NoAvailableMove.into());
        }
        let listing = available
            .iter()
            .map(Move::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        loop {
            write!(
                out,
                "Enter the position for {} (available: [{}]): ",
                state.to_move(),
                listing
            )?;
            out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before {} chose a move", self.name);
            }

            // Re-prompt on anything that is not an open cell.
            match line.parse::<Move>() {
                Ok(mv) if available.contains(&mv) => {
                    debug!(player = %self.name, position = %mv, "Human chose move");
                    return Ok(mv);
                }
                Ok(mv) => {
                    let err = GameError::InvalidMove { position: mv };
                    warn!(player = %self.name, %err, "Rejected input");
                    writeln!(out, "{}", err)?;
                }
                Err(err) => {
                    warn!(player = %self.name, %err, "Rejected input");
                    writeln!(out, "{}", err)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
