//! Generic depth-limited minimax with alpha-beta pruning.
//!
//! The search is game-agnostic: a game plugs in through the traits in
//! [`traits`], and the board-specific implementation lives in `caro_search`.

mod search;
mod traits;


pub use search::{
    alpha_beta, alpha_beta_search, minimax, SearchContext, SearchError, DEFAULT_INTERIOR_FAN_OUT,
    DEFAULT_ROOT_FAN_OUT, WIN_SCORE,
};
pub use traits::{Evaluator, GameMove, GameState, MoveGenerator};
