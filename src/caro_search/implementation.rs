//! Board-specific trait implementations for the alpha-beta search.

use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, GameState, MoveGenerator, SearchContext, SearchError,
};
use crate::board::{error::BoardError, Board, Cell, Player};
use crate::evaluate::evaluate_board;
use crate::move_generator::MoveGenerator as CandidateGenerator;
use crate::rules::check_win_fast;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

impl GameState for Board {
    #[inline]
    fn toggle_turn(&mut self) {
        Board::toggle_turn(self);
    }
}

/// A stone placed by `player` on `cell`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaroMove {
    pub cell: Cell,
    pub player: Player,
}

impl CaroMove {
    pub fn new(cell: Cell, player: Player) -> Self {
        Self { cell, player }
    }
}

impl GameMove for CaroMove {
    type State = Board;
    type Error = BoardError;

    #[inline]
    fn apply(&self, state: &mut Board) -> Result<(), BoardError> {
        state.put(self.cell, self.player)
    }

    #[inline]
    fn undo(&self, state: &mut Board) -> Result<(), BoardError> {
        state.remove(self.cell).map(|_| ())
    }

    #[inline]
    fn is_winning(&self, state: &Board) -> bool {
        check_win_fast(state, self.cell)
    }
}

/// Produces candidate stones for the side to move, ordered by the heuristic
/// of the player the search is maximizing for.
#[derive(Clone, Debug)]
pub struct CaroMoveGenerator {
    inner: CandidateGenerator,
    maximizer: Player,
}

impl CaroMoveGenerator {
    pub fn new(maximizer: Player) -> Self {
        Self {
            inner: CandidateGenerator::default(),
            maximizer,
        }
    }
}

impl MoveGenerator<Board> for CaroMoveGenerator {
    type Move = CaroMove;

    #[inline]
    fn generate_moves(&self, state: &Board) -> Vec<CaroMove> {
        let player = state.turn();
        self.inner
            .generate_candidates(state, self.maximizer)
            .into_iter()
            .map(|candidate| CaroMove::new(candidate.cell, player))
            .collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CaroEvaluator {
    maximizer: Player,
}

impl CaroEvaluator {
    pub fn new(maximizer: Player) -> Self {
        Self { maximizer }
    }
}

impl Evaluator<Board> for CaroEvaluator {
    #[inline]
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    fn evaluate(&self, state: &Board) -> i32 {
        evaluate_board(state, self.maximizer)
    }
}

/// Searches for the best move for the side to move on `board`. The board is
/// restored before this returns, whether the search succeeds or not.
#[must_use = "search returns the best move found"]
pub fn search_best_move(
    context: &mut SearchContext,
    board: &mut Board,
) -> Result<CaroMove, SearchError> {
    let maximizer = board.turn();
    let move_generator = CaroMoveGenerator::new(maximizer);
    let evaluator = CaroEvaluator::new(maximizer);

    alpha_beta_search(context, board, &move_generator, &evaluator)
}
