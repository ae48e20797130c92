use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::alpha_beta_searcher::{SearchContext, SearchError};
use crate::board::{Board, Cell, DEFAULT_BOARD_SIZE};
use crate::caro_search::search_best_move;
use crate::game::difficulty::Difficulty;
use crate::game::session::{Game, GameError, MoveHistory};
use crate::move_generator::MoveGenerator;
use crate::rules::GameResult;

/// Number of top candidates easy mode picks from when it plays at random.
pub const RANDOM_POOL_SIZE: usize = 5;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Engine configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    pub board_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("no legal move is left on the board")]
    NoLegalMove,
    #[error("Search error: {error}")]
    SearchError { error: SearchError },
    #[error("Game error: {error}")]
    GameError { error: GameError },
}

/// Picks moves for the side to move. Holds no reference to any board between
/// calls; the only state carried over is configuration, the random source and
/// statistics about the last search.
pub struct Engine<R: Rng = StdRng> {
    config: EngineConfig,
    move_generator: MoveGenerator,
    search_context: SearchContext,
    last_score: Option<i32>,
    rng: R,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// An engine whose random choices are reproducible.
    pub fn seeded(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        Self {
            config,
            move_generator: MoveGenerator::default(),
            search_context: SearchContext::new(config.difficulty.depth()),
            last_score: None,
            rng,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.search_context.set_search_depth(difficulty.depth());
    }

    /// Chooses a cell for the side to move on `board`.
    ///
    /// The opening is played by rule: the center on an empty history, then a
    /// random neighbor of the opponent's first stone. After that, easy mode
    /// sometimes plays one of the best few candidates at random, and otherwise
    /// the move comes from the search at the difficulty's depth.
    ///
    /// The board is mutated while searching and is restored before this returns.
    pub fn get_move(
        &mut self,
        board: &mut Board,
        history: &MoveHistory,
    ) -> Result<Cell, EngineError> {
        self.last_score = None;

        if history.is_empty() {
            let center = board.center();
            if board.is_empty(center) {
                debug!("opening in the center at {}", center);
                return Ok(center);
            }
        }

        if history.len() == 1 {
            if let Some(reply) = self.adjacent_reply(board, history) {
                debug!("replying next to the first stone at {}", reply);
                return Ok(reply);
            }
        }

        let candidates = self.move_generator.generate_candidates(board, board.turn());
        if candidates.is_empty() {
            return if board.has_stones() {
                Err(EngineError::NoLegalMove)
            } else {
                Ok(board.center())
            };
        }
        debug!("{} candidate moves", candidates.len());

        let policy = self.config.difficulty.policy();
        if policy.randomization > 0.0 && self.rng.gen::<f64>() < policy.randomization {
            let pool = &candidates[..candidates.len().min(RANDOM_POOL_SIZE)];
            if let Some(candidate) = pool.choose(&mut self.rng) {
                info!("playing {} at random among the top {}", candidate.cell, pool.len());
                return Ok(candidate.cell);
            }
        }

        self.search_context.set_search_depth(policy.depth);
        let best_move = search_best_move(&mut self.search_context, board)
            .map_err(|error| EngineError::SearchError { error })?;
        self.last_score = self.search_context.last_score();

        Ok(best_move.cell)
    }

    /// Picks a move for the side to move in `game` and plays it.
    pub fn make_best_move(&mut self, game: &mut Game) -> Result<(Cell, GameResult), EngineError> {
        let (board, history) = game.board_and_history_mut();
        let cell = self.get_move(board, history)?;
        let result = game
            .make_move(cell)
            .map_err(|error| EngineError::GameError { error })?;
        Ok((cell, result))
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            depth: self.search_context.search_depth(),
            last_score: self.last_score,
            last_search_duration: self.search_context.last_search_duration(),
        }
    }

    /// A random empty neighbor of the only stone played so far. Neighbors off
    /// the board are clamped onto its edge, and those landing on a stone are
    /// dropped.
    fn adjacent_reply(&mut self, board: &Board, history: &MoveHistory) -> Option<Cell> {
        let last = history.last()?.cell;
        let max = board.size() as isize - 1;
        let neighbors: Vec<Cell> = NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| {
                let row = (last.row as isize + dr).clamp(0, max);
                let col = (last.col as isize + dc).clamp(0, max);
                Cell::new(row as usize, col as usize)
            })
            .filter(|&cell| board.is_empty(cell))
            .collect();

        neighbors.choose(&mut self.rng).copied()
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub depth: u8,
    pub last_score: Option<i32>,
    pub last_search_duration: Option<Duration>,
}
