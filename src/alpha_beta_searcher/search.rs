//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Once `beta <= alpha` at a node, the remaining
//! candidates cannot change the value seen by the parent and are skipped. The value returned
//! for a node is the same one plain minimax computes over the same candidate lists.
//!
//! # Make/Unmake
//!
//! A single game state is shared by every frame of the recursion. Each candidate is applied
//! before descending and undone before the next candidate is tried, so no state is copied.
//! The state is exclusively borrowed for the whole search, which makes a search
//! non-reentrant: two searches must never run against the same state at once.
//!
//! # Terminal Detection
//!
//! A node first asks the move that produced it whether that move won the game. If it did, the
//! side about to move has lost, and the score is biased by the remaining depth so that quicker
//! wins (and slower losses) are preferred.
//!
//! # Fan-out
//!
//! Candidate lists come best first from the `MoveGenerator`; the search looks at the first
//! `root_fan_out` of them at the root and the first `interior_fan_out` below it.

use std::time::{Duration, Instant};

use log::{debug, info};
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::{Evaluator, GameMove, GameState, MoveGenerator};

/// Base score for a decided game; the remaining depth is added on top.
pub const WIN_SCORE: i32 = 100_000;

pub const DEFAULT_ROOT_FAN_OUT: usize = 15;
pub const DEFAULT_INTERIOR_FAN_OUT: usize = 10;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("failed to apply or undo a move during search: {reason}")]
    MoveApplication { reason: String },
}

/// Search configuration parameters.
struct SearchConfig {
    depth: u8,
    root_fan_out: usize,
    interior_fan_out: usize,
}

impl SearchConfig {
    fn new(depth: u8, root_fan_out: usize, interior_fan_out: usize) -> Self {
        Self {
            depth,
            root_fan_out,
            interior_fan_out,
        }
    }
}

/// Statistics collected during search. These are diagnostic only and never
/// feed back into move selection.
struct SearchStats {
    position_count: usize,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn new() -> Self {
        Self {
            position_count: 0,
            last_score: None,
            last_duration: None,
        }
    }

    fn increment(&mut self) {
        self.position_count += 1;
    }

    fn reset(&mut self) {
        self.position_count = 0;
        self.last_score = None;
        self.last_duration = None;
    }

    fn record_result(&mut self, score: i32, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self::with_fan_out(depth, DEFAULT_ROOT_FAN_OUT, DEFAULT_INTERIOR_FAN_OUT)
    }

    pub fn with_fan_out(depth: u8, root_fan_out: usize, interior_fan_out: usize) -> Self {
        Self {
            config: SearchConfig::new(depth, root_fan_out, interior_fan_out),
            stats: SearchStats::new(),
        }
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn root_fan_out(&self) -> usize {
        self.config.root_fan_out
    }

    pub fn interior_fan_out(&self) -> usize {
        self.config.interior_fan_out
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    fn increment_position_count(&mut self) {
        self.stats.increment();
    }
}

/// Applies a move, executes a closure with the new state, then undoes the move.
/// Handles turn toggling automatically. The move is undone even when the closure fails.
fn with_move_applied<S, M, F, R>(game_move: &M, state: &mut S, f: F) -> Result<R, SearchError>
where
    S: GameState,
    M: GameMove<State = S>,
    F: FnOnce(&mut S) -> Result<R, SearchError>,
{
    game_move
        .apply(state)
        .map_err(|error| SearchError::MoveApplication {
            reason: format!("apply {:?}: {:?}", game_move, error),
        })?;
    state.toggle_turn();

    let result = f(state);

    state.toggle_turn();
    game_move
        .undo(state)
        .map_err(|error| SearchError::MoveApplication {
            reason: format!("undo {:?}: {:?}", game_move, error),
        })?;

    result
}

/// Score of a node whose producing move won the game. The side about to move
/// has just lost.
#[inline]
fn terminal_score(depth: u8, maximizing: bool) -> i32 {
    let score = WIN_SCORE + depth as i32;
    if maximizing {
        -score
    } else {
        score
    }
}

/// Evaluates a node with alpha-beta pruning.
///
/// `last_move` is the move that produced `state`; when it won the game the
/// node is terminal. At `depth == 0` the static evaluation is returned. A node
/// with depth left but no candidates scores 0.
#[allow(clippy::too_many_arguments)]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta<S, G, E>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    last_move: Option<&G::Move>,
) -> Result<i32, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.increment_position_count();

    if let Some(game_move) = last_move {
        if game_move.is_winning(state) {
            return Ok(terminal_score(depth, maximizing));
        }
    }

    if depth == 0 {
        return Ok(evaluator.evaluate(state));
    }

    let mut candidates = move_generator.generate_moves(state);
    candidates.truncate(context.interior_fan_out());

    if candidates.is_empty() {
        return Ok(0);
    }

    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for candidate in candidates.iter() {
        let score = with_move_applied(candidate, state, |state| {
            alpha_beta(
                context,
                state,
                move_generator,
                evaluator,
                depth - 1,
                alpha,
                beta,
                !maximizing,
                Some(candidate),
            )
        })?;

        if maximizing {
            best_score = best_score.max(score);
            alpha = alpha.max(score);
        } else {
            best_score = best_score.min(score);
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    Ok(best_score)
}

/// Plain minimax over the same truncated candidate lists as [`alpha_beta`],
/// without pruning. Used to verify the pruned search and for diagnostics.
pub fn minimax<S, G, E>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    depth: u8,
    maximizing: bool,
    last_move: Option<&G::Move>,
) -> Result<i32, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.increment_position_count();

    if let Some(game_move) = last_move {
        if game_move.is_winning(state) {
            return Ok(terminal_score(depth, maximizing));
        }
    }

    if depth == 0 {
        return Ok(evaluator.evaluate(state));
    }

    let mut candidates = move_generator.generate_moves(state);
    candidates.truncate(context.interior_fan_out());

    if candidates.is_empty() {
        return Ok(0);
    }

    let mut scores = Vec::with_capacity(candidates.len());
    for candidate in candidates.iter() {
        scores.push(with_move_applied(candidate, state, |state| {
            minimax(
                context,
                state,
                move_generator,
                evaluator,
                depth - 1,
                !maximizing,
                Some(candidate),
            )
        })?);
    }

    let best = if maximizing {
        scores.into_iter().max()
    } else {
        scores.into_iter().min()
    };
    Ok(best.unwrap_or(0))
}

/// Searches for the best move for the side to move, which is treated as the
/// maximizing player.
///
/// Each of the first `root_fan_out` candidates is applied and searched with a
/// full window at `depth - 1` from the opponent's perspective. The candidate
/// with the highest score wins; ties keep the earlier candidate.
///
/// # Returns
///
/// - `Ok(best_move)` - The best move found at the configured depth
/// - `Err(SearchError::DepthTooLow)` - If search depth is < 1
/// - `Err(SearchError::NoAvailableMoves)` - If the generator returns no candidates
///
/// # Examples
///
/// ```ignore
/// let mut context = SearchContext::new(3);
/// let best_move = alpha_beta_search(&mut context, &mut board, &move_gen, &evaluator)?;
/// ```
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta_search<S, G, E>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
) -> Result<G::Move, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.reset_stats();
    let depth = context.search_depth();
    debug!("alpha-beta search depth: {}", depth);

    if depth < 1 {
        return Err(SearchError::DepthTooLow);
    }

    let start = Instant::now();
    let mut candidates = move_generator.generate_moves(state);
    candidates.truncate(context.root_fan_out());

    let mut best: Option<(G::Move, i32)> = None;

    for candidate in candidates.into_iter() {
        let score = with_move_applied(&candidate, state, |state| {
            alpha_beta(
                context,
                state,
                move_generator,
                evaluator,
                depth - 1,
                i32::MIN,
                i32::MAX,
                false,
                Some(&candidate),
            )
        })?;
        debug!("root candidate {:?} scored {}", candidate, score);

        let improves = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if improves {
            best = Some((candidate, score));
        }
    }

    let (best_move, best_score) = best.ok_or(SearchError::NoAvailableMoves)?;
    let elapsed = start.elapsed();
    context.stats.record_result(best_score, elapsed);

    info!(
        "evaluated {} positions in {:?}, best {:?} scored {}",
        context.searched_position_count(),
        elapsed,
        best_move,
        best_score
    );

    Ok(best_move)
}
