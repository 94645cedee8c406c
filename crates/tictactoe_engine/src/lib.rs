//! Tic-tac-toe game state with a minimax computer opponent.
//!
//! # Architecture
//!
//! - **State**: the board, whose turn it is, and the derived terminal flag and
//!   score ([`GameState`]).
//! - **Search**: minimax and alpha-beta search over one shared, mutable state
//!   ([`Searcher`], [`best_move`]).
//! - **Strategy**: search-backed and randomized move pickers used by computer
//!   players ([`Strategy`], [`choose_move`]).
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameState, SearchVariant, best_move};
//!
//! let mut state = GameState::new();
//! while !state.is_terminal() {
//!     let mv = best_move(&mut state, SearchVariant::AlphaBeta)?;
//!     state.apply(mv)?;
//! }
//! assert_eq!(state.score(), 0);
//! # Ok::<(), tictactoe_engine::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod search;
mod state;
mod strategy;
mod types;

pub use error::GameError;
pub use search::{SCORE_BOUND, SearchVariant, Searcher, best_move, minimax, minimax_alpha_beta};
pub use state::{GameState, Outcome};
pub use strategy::{
    RANDOM_MOVE_CHANCE, RANDOM_MOVE_DRAWS, Strategy, best_move_randomized, choose_move,
    random_move,
};
pub use types::{Board, CELLS, LINES, Mark, Move};
