use std::cmp::Reverse;

use rustc_hash::FxHashSet;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::{Board, Cell, Player};
use crate::evaluate::score_cell;

/// Candidates are empty cells within this Chebyshev distance of a stone.
pub const SEARCH_RADIUS: isize = 2;

/// An empty cell together with its ordering score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateMove {
    pub cell: Cell,
    /// `1.1 * offense + defense`, kept in tenths to stay in integers.
    pub score: i32,
}

/// Heuristic priority of playing `cell`: what it builds for `maximizer`,
/// weighted slightly above what it takes away from the opponent. In tenths.
#[inline]
pub fn heuristic_score(board: &Board, cell: Cell, maximizer: Player) -> i32 {
    let offense = score_cell(board, cell, maximizer);
    let defense = score_cell(board, cell, maximizer.opponent());
    11 * offense + 10 * defense
}

#[derive(Clone, Debug)]
pub struct MoveGenerator {
    radius: isize,
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self {
            radius: SEARCH_RADIUS,
        }
    }
}

impl MoveGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every empty cell within the search radius of a stone, best first.
    /// Equal scores keep row-major order. The list is not truncated; callers
    /// decide how many candidates to look at. An empty board yields no candidates.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn generate_candidates(&self, board: &Board, maximizer: Player) -> Vec<CandidateMove> {
        let size = board.size();
        let mut seen = FxHashSet::default();
        let mut candidates = Vec::new();

        for (stone, _) in board.stones() {
            for dr in -self.radius..=self.radius {
                for dc in -self.radius..=self.radius {
                    let cell = match stone.offset(dr, dc, size) {
                        Some(cell) => cell,
                        None => continue,
                    };
                    if !board.is_empty(cell) || !seen.insert(cell) {
                        continue;
                    }
                    candidates.push(CandidateMove {
                        cell,
                        score: heuristic_score(board, cell, maximizer),
                    });
                }
            }
        }

        candidates.sort_unstable_by_key(|candidate| (Reverse(candidate.score), candidate.cell));
        candidates
    }
}
