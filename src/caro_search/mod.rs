//! Caro-specific implementation of the alpha-beta search traits.

pub mod implementation;


pub use implementation::{search_best_move, CaroEvaluator, CaroMove, CaroMoveGenerator};
