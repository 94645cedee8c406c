//! Computer player backed by the engine's strategies.

use super::Player;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use tictactoe_engine::{GameState, Move, Strategy, choose_move};
use tracing::{debug, instrument};

/// Picks moves with a [`Strategy`].
#[derive(Debug)]
pub struct ComputerPlayer {
    name: String,
    strategy: Strategy,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a computer player. Without a seed the random source is
    /// seeded from the OS.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, strategy: Strategy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            name: name.as_ref().to_string(),
            strategy,
            rng,
        }
    }

    /// The strategy in use.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Player for ComputerPlayer {
    fn choose_move(&mut self, state: &GameState, _out: &mut dyn Write) -> Result<Move> {
        // Search on a private copy so the game's own state is never undone.
        let mut scratch = state.clone();
        let mv = choose_move(&mut scratch, self.strategy, &mut self.rng)?;
        debug!(player = %self.name, strategy = %self.strategy, position = %mv, "Computer chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
