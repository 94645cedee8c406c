//! Minimax and alpha-beta move search.
//!
//! Every search explores one shared [`GameState`]: a candidate move is
//! applied, the subtree is searched, and the move is undone before the next
//! candidate. Each `place` is paired with an `undo` on every path, so the
//! state is unchanged when a search returns.

use crate::error::GameError;
use crate::state::GameState;
use crate::types::{Mark, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Sentinel outside any achievable score (scores stay within ±8).
pub const SCORE_BOUND: i32 = 1000;

/// Which search [`best_move`] runs.
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
pub enum SearchVariant {
    /// Plain minimax over the full tree.
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
}

/// Runs searches and counts the nodes they visit.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    /// Creates a searcher with a zeroed node count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited by all searches run so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Best score reachable within `depth` plies.
    ///
    /// The maximizing side wants the score high, the other side wants it low.
    pub fn minimax(&mut self, state: &mut GameState, depth: usize, maximizing: bool) -> i32 {
        self.nodes += 1;
        if state.is_terminal() || depth == 0 {
            return state.score();
        }

        let mut best = if maximizing { -SCORE_BOUND } else { SCORE_BOUND };
        for mv in state.available_moves() {
            state.place(mv);
            let eval = self.minimax(state, depth - 1, !maximizing);
            state.undo(mv);

            best = if maximizing { best.max(eval) } else { best.min(eval) };
        }
        best
    }

    /// [`minimax`](Self::minimax) with an alpha-beta window.
    ///
    /// Returns the same value as `minimax` when called with the full window
    /// `(-SCORE_BOUND, SCORE_BOUND)`, visiting fewer nodes.
    pub fn minimax_alpha_beta(
        &mut self,
        state: &mut GameState,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;
        if state.is_terminal() || depth == 0 {
            return state.score();
        }

        if maximizing {
            let mut max_eval = -SCORE_BOUND;
            for mv in state.available_moves() {
                state.place(mv);
                let eval = self.minimax_alpha_beta(state, depth - 1, alpha, beta, false);
                state.undo(mv);

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break; // Beta cut-off
                }
            }
            max_eval
        } else {
            let mut min_eval = SCORE_BOUND;
            for mv in state.available_moves() {
                state.place(mv);
                let eval = self.minimax_alpha_beta(state, depth - 1, alpha, beta, true);
                state.undo(mv);

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break; // Alpha cut-off
                }
            }
            min_eval
        }
    }

    /// Picks the best move for the player to move by searching to the end
    /// of the game.
    ///
    /// Each candidate's subtree is scored with the opponent to move next. The
    /// score is read from the mover's side: as-is for PlayerA and negated for
    /// PlayerB, whose wins score negative. The strictly greatest candidate
    /// wins, so ties keep the lowest position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoAvailableMove`] if the game is over.
    #[instrument(skip(self, state), fields(to_move = ?state.to_move(), moves = state.moves_played()))]
    pub fn best_move(
        &mut self,
        state: &mut GameState,
        variant: SearchVariant,
    ) -> Result<Move, GameError> {
        let candidates = state.available_moves();
        let Some(&first) = candidates.first() else {
            return Err(GameError::NoAvailableMove);
        };

        let depth = candidates.len() - 1;
        let (sign, opponent_maximizes) = match state.to_move() {
            Mark::PlayerB => (-1, true),
            _ => (1, false),
        };

        let mut best_score = -SCORE_BOUND;
        let mut best = first;
        for mv in candidates {
            state.place(mv);
            let score = sign
                * match variant {
                    SearchVariant::Minimax => self.minimax(state, depth, opponent_maximizes),
                    SearchVariant::AlphaBeta => self.minimax_alpha_beta(
                        state,
                        depth,
                        -SCORE_BOUND,
                        SCORE_BOUND,
                        opponent_maximizes,
                    ),
                };
            state.undo(mv);

            if score > best_score {
                best_score = score;
                best = mv;
            }
        }

        debug!(position = %best, score = best_score, nodes = self.nodes, "Search chose move");
        Ok(best)
    }
}

/// [`Searcher::minimax`] with a throwaway node counter.
pub fn minimax(state: &mut GameState, depth: usize, maximizing: bool) -> i32 {
    Searcher::new().minimax(state, depth, maximizing)
}

/// [`Searcher::minimax_alpha_beta`] with a throwaway node counter.
pub fn minimax_alpha_beta(
    state: &mut GameState,
    depth: usize,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> i32 {
    Searcher::new().minimax_alpha_beta(state, depth, alpha, beta, maximizing)
}

/// [`Searcher::best_move`] with a throwaway node counter.
pub fn best_move(state: &mut GameState, variant: SearchVariant) -> Result<Move, GameError> {
    Searcher::new().best_move(state, variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn play(positions: &[usize]) -> GameState {
        let mut state = GameState::new();
        for &p in positions {
            state.apply(Move::new(p).unwrap()).unwrap();
        }
        state
    }

    #[test]
    fn test_terminal_returns_score() {
        let mut state = play(&[1, 4, 2, 5, 3]);
        assert_eq!(minimax(&mut state, 4, true), 1);
        assert_eq!(minimax_alpha_beta(&mut state, 4, -SCORE_BOUND, SCORE_BOUND, false), 1);
    }

    #[test]
    fn test_depth_zero_returns_score() {
        let mut state = play(&[1, 4]);
        assert_eq!(minimax(&mut state, 0, true), 0);
    }

    #[test]
    fn test_search_leaves_state_unchanged() {
        let mut state = play(&[5, 1]);
        let before = state.clone();
        minimax(&mut state, 7, true);
        minimax_alpha_beta(&mut state, 7, -SCORE_BOUND, SCORE_BOUND, false);
        best_move(&mut state, SearchVariant::AlphaBeta).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_player_a_takes_immediate_win() {
        // O O _ / X X _ / _ _ _, O to move.
        let mut state = play(&[1, 4, 2, 5]);
        for variant in SearchVariant::iter() {
            assert_eq!(best_move(&mut state, variant).unwrap().position(), 3);
        }
    }

    #[test]
    fn test_player_b_takes_immediate_win() {
        // X _ X / _ O _ / O _ O, X to move.
        let mut state = play(&[5, 1, 9, 3, 7]);
        for variant in SearchVariant::iter() {
            assert_eq!(best_move(&mut state, variant).unwrap().position(), 2);
        }
    }

    #[test]
    fn test_player_b_blocks() {
        // O O _ / _ X _ / _ _ _, X to move must block at 3.
        let mut state = play(&[1, 5, 2]);
        for variant in SearchVariant::iter() {
            assert_eq!(best_move(&mut state, variant).unwrap().position(), 3);
        }
    }

    #[test]
    fn test_forced_win_ties_keep_lowest_position() {
        // O O _ / X X _ / _ _ O, X to move. Playing 3 forks 6 and 7, so it
        // scores the same as the immediate win at 6 and comes first.
        let mut state = play(&[1, 4, 2, 5, 9]);
        assert_eq!(best_move(&mut state, SearchVariant::Minimax).unwrap().position(), 3);
    }

    #[test]
    fn test_no_available_move() {
        let mut state = play(&[1, 4, 2, 5, 3]);
        assert_eq!(
            best_move(&mut state, SearchVariant::Minimax),
            Err(GameError::NoAvailableMove)
        );
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let mut state = GameState::new();
        let mut plain = Searcher::new();
        let mut pruned = Searcher::new();
        let a = plain.best_move(&mut state, SearchVariant::Minimax).unwrap();
        let b = pruned.best_move(&mut state, SearchVariant::AlphaBeta).unwrap();
        assert_eq!(a, b);
        assert!(pruned.nodes() < plain.nodes());
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("alpha-beta".parse::<SearchVariant>().unwrap(), SearchVariant::AlphaBeta);
        assert_eq!(SearchVariant::Minimax.to_string(), "minimax");
    }
}
