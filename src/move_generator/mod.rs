//! Candidate move generation: empty cells near the stones already played,
//! ranked by how much they help both sides.

pub mod generator;

pub use generator::{heuristic_score, CandidateMove, MoveGenerator, SEARCH_RADIUS};
