//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

/// Represents the state of a two-player zero-sum game.
pub trait GameState {
    /// Switches to the next player's turn.
    fn toggle_turn(&mut self);
}

/// Represents an action that can be applied to and undone from a game state.
pub trait GameMove: Clone + PartialEq + Debug {
    type State: GameState;
    type Error: Debug;

    /// Applies this move to the given state.
    fn apply(&self, state: &mut Self::State) -> Result<(), Self::Error>;

    /// Undoes this move on the given state.
    fn undo(&self, state: &mut Self::State) -> Result<(), Self::Error>;

    /// Returns true if this move, already applied to `state`, won the game for
    /// the side that played it.
    fn is_winning(&self, state: &Self::State) -> bool;
}

/// Generates candidate moves from a given game state.
pub trait MoveGenerator<S: GameState> {
    type Move: GameMove<State = S>;

    /// Generates the candidate moves for the current player, best first. The
    /// search truncates this list to its configured fan-out.
    fn generate_moves(&self, state: &S) -> Vec<Self::Move>;
}

/// Evaluates a game position and returns a score.
pub trait Evaluator<S: GameState> {
    /// Evaluates the given state. Higher scores favor the maximizing player.
    fn evaluate(&self, state: &S) -> i32;
}
