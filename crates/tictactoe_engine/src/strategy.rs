//! Move selection strategies, including the randomized ones.

use crate::error::GameError;
use crate::search::{SearchVariant, Searcher};
use crate::state::GameState;
use crate::types::Move;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Out of [`RANDOM_MOVE_DRAWS`], how many draws make the randomized
/// strategy play a random move.
pub const RANDOM_MOVE_CHANCE: u32 = 2;

/// Size of the uniform draw used by [`best_move_randomized`].
pub const RANDOM_MOVE_DRAWS: u32 = 10;

/// How a computer player picks its moves.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Full minimax search.
    Minimax,
    /// Full alpha-beta search.
    #[default]
    AlphaBeta,
    /// Minimax, except for an occasional random move.
    Randomized,
    /// A uniformly random move every turn.
    Random,
}

/// Picks a uniformly random available move.
///
/// # Errors
///
/// Returns [`GameError::NoAvailableMove`] if the game is over.
#[instrument(level = "debug", skip(state, rng))]
pub fn random_move<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Result<Move, GameError> {
    state
        .available_moves()
        .choose(rng)
        .copied()
        .ok_or(GameError::NoAvailableMove)
}

/// Plays [`random_move`] two times in ten and minimax otherwise.
///
/// # Errors
///
/// Returns [`GameError::NoAvailableMove`] if the game is over.
#[instrument(level = "debug", skip(state, rng))]
pub fn best_move_randomized<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
) -> Result<Move, GameError> {
    if rng.gen_range(0..RANDOM_MOVE_DRAWS) < RANDOM_MOVE_CHANCE {
        debug!("Randomized strategy skipping search");
        return random_move(state, rng);
    }
    Searcher::new().best_move(state, SearchVariant::Minimax)
}

/// Picks a move for the player to move according to `strategy`.
///
/// # Errors
///
/// Returns [`GameError::NoAvailableMove`] if the game is over.
pub fn choose_move<R: Rng + ?Sized>(
    state: &mut GameState,
    strategy: Strategy,
    rng: &mut R,
) -> Result<Move, GameError> {
    match strategy {
        Strategy::Minimax => Searcher::new().best_move(state, SearchVariant::Minimax),
        Strategy::AlphaBeta => Searcher::new().best_move(state, SearchVariant::AlphaBeta),
        Strategy::Randomized => best_move_randomized(state, rng),
        Strategy::Random => random_move(state, rng),
    }
}
