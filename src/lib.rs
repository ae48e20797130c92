//! A move-search engine for caro, the five-in-a-row game played on a square grid.
//!
//! The engine is layered from the board up:
//! - [`board`] holds the stones and the side to move.
//! - [`rules`] detects five in a row after a move.
//! - [`evaluate`] scores runs of stones and whole positions.
//! - [`move_generator`] lists and orders the cells worth considering.
//! - [`alpha_beta_searcher`] is a game-agnostic minimax with alpha-beta pruning,
//!   which [`caro_search`] plugs the board into.
//! - [`game`] owns a session, picks the engine's moves and runs the terminal game.

pub mod alpha_beta_searcher;
pub mod board;
pub mod caro_search;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod move_generator;
pub mod rules;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;

pub use board::{Board, Cell, Player};
pub use game::difficulty::Difficulty;
pub use game::engine::{Engine, EngineConfig, EngineError};
pub use game::session::{Game, GameError, Move, MoveHistory};
pub use rules::GameResult;
