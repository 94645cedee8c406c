//! Mutable game state with derived terminal flag and score.

use crate::error::GameError;
use crate::types::{Board, CELLS, Mark, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Win(Mark),
    /// The board filled with no line completed.
    Draw,
}

/// Complete game state.
///
/// [`apply`](Self::apply) and [`undo`](Self::undo) are the only mutations.
/// The terminal flag and score are recomputed after each of them and cannot
/// be set directly.
///
/// The score follows a perspective-flip convention: it is `+lines owned by
/// PlayerA` when PlayerA made the last move and `-lines owned by PlayerB`
/// when PlayerB did. Under normal play that means `+1` for a PlayerA win,
/// `-1` for a PlayerB win and `0` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Mark,
    moves: usize,
    terminal: bool,
    score: i32,
}

impl GameState {
    /// Creates an empty game with PlayerA to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::PlayerA,
            moves: 0,
            terminal: false,
            score: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark at `mv`.
    pub fn cell(&self, mv: Move) -> Mark {
        self.board.get(mv)
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Number of moves on the board.
    pub fn moves_played(&self) -> usize {
        self.moves
    }

    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Score computed by the last `apply`/`undo`.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Empty cells in ascending order, or nothing once the game is over.
    pub fn available_moves(&self) -> Vec<Move> {
        if self.terminal {
            return Vec::new();
        }
        Move::all().filter(|&mv| self.board.is_empty(mv)).collect()
    }

    /// Places the current player's mark at `mv` and passes the turn.
    ///
    /// The score is evaluated before the turn passes, so it reflects the
    /// player who just moved.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the cell is occupied. The state
    /// is left untouched in that case.
    pub fn apply(&mut self, mv: Move) -> Result<(), GameError> {
        if !self.board.is_empty(mv) {
            debug!(position = %mv, "Rejected move on occupied cell");
            return Err(GameError::InvalidMove { position: mv });
        }
        self.place(mv);
        Ok(())
    }

    /// [`apply`](Self::apply) for a cell already known to be empty.
    pub(crate) fn place(&mut self, mv: Move) {
        debug_assert!(self.board.is_empty(mv));
        self.board.set(mv, self.to_move);
        self.moves += 1;
        (self.terminal, self.score) = self.evaluate();
        self.to_move = self.to_move.opponent();
    }

    /// Reverts [`apply`](Self::apply) of `mv`.
    ///
    /// Only the most recently applied move may be undone; anything else
    /// leaves the state inconsistent. This is not checked.
    pub fn undo(&mut self, mv: Move) {
        debug_assert!(
            self.moves > 0 && !self.board.is_empty(mv),
            "undo of {} without a matching apply",
            mv
        );
        self.board.set(mv, Mark::Empty);
        self.moves -= 1;
        (self.terminal, self.score) = self.evaluate();
        self.to_move = self.to_move.opponent();
    }

    /// Scans all eight lines and returns `(terminal, score)`.
    ///
    /// Terminal when the board is full or either player owns a line. Both
    /// players owning lines at once cannot happen in alternating play but is
    /// still reported as terminal.
    ///
    /// The score is taken from the side whose turn it is. [`apply`](Self::apply)
    /// evaluates before flipping the turn, so [`score`](Self::score) reflects
    /// the player who just moved, while calling this afterwards reflects the
    /// player about to move.
    pub fn evaluate(&self) -> (bool, i32) {
        let player_score = self.board.lines_owned_by(Mark::PlayerA) as i32;
        let opp_score = self.board.lines_owned_by(Mark::PlayerB) as i32;
        let terminal = self.moves == CELLS || player_score != 0 || opp_score != 0;
        let score = if self.to_move == Mark::PlayerA {
            player_score
        } else {
            -opp_score
        };
        (terminal, score)
    }

    /// The result of a finished game, or `None` while it is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.terminal {
            return None;
        }
        Some(match self.score {
            s if s > 0 => Outcome::Win(Mark::PlayerA),
            s if s < 0 => Outcome::Win(Mark::PlayerB),
            _ => Outcome::Draw,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}
