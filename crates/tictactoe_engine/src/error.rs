//! Game error types.

use crate::types::Move;
use derive_more::{Display, Error};

/// Errors returned by state mutation and move search.
///
/// Every variant is a caller contract violation: check
/// [`GameState::available_moves`](crate::GameState::available_moves) or
/// [`GameState::is_terminal`](crate::GameState::is_terminal) first. They are
/// returned instead of panicking so a driving loop can re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The target cell is already occupied.
    #[display("Invalid move: position {} is already occupied", position)]
    InvalidMove {
        /// The occupied position.
        position: Move,
    },

    /// A position outside `1..=9` was given.
    #[display("Invalid move: position {} is off the board (expected 1-9)", position)]
    PositionOutOfRange {
        /// The rejected position.
        position: usize,
    },

    /// Input could not be read as a position number.
    #[display("Invalid move: {:?} is not a position number", input)]
    Unparsable {
        /// The rejected input.
        input: String,
    },

    /// A move was requested but no empty cell remains.
    #[display("No available move: the game is already over")]
    NoAvailableMove,
}
