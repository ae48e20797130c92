//! The game session: the single owner of the board and its move history, and
//! the authority on when a game is over.

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::board::{Board, BoardError, Cell, Player};
use crate::rules::{game_result, GameResult};

/// A stone that was played in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub cell: Cell,
    pub player: Player,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.player, self.cell)
    }
}

/// Moves in the order they were played. Entries are only ever appended, or
/// popped from the end by undo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stand-in history for a position loaded without one: every stone in
    /// row-major order. Only its length and, for a single stone, its last entry
    /// are meaningful.
    pub fn from_stones(board: &Board) -> Self {
        board
            .stones()
            .map(|(cell, player)| Move { cell, player })
            .collect::<Vec<_>>()
            .into()
    }

    pub fn push(&mut self, played: Move) {
        self.moves.push(played);
    }

    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

impl From<Vec<Move>> for MoveHistory {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,
    #[error("there are no moves to undo")]
    NothingToUndo,
    #[error("board error: {error}")]
    BoardError { error: BoardError },
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: MoveHistory,
    result: GameResult,
}

impl Default for Game {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

impl Game {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(size)?))
    }

    /// Starts a session from an existing position. The order in which its
    /// stones were played is unknown, so the history starts out empty.
    pub fn from_board(board: Board) -> Self {
        let result = board
            .stones()
            .map(|(cell, _)| game_result(&board, cell))
            .find(|result| matches!(result, GameResult::Win { .. }))
            .unwrap_or_else(|| {
                if board.is_full() {
                    GameResult::Draw
                } else {
                    GameResult::Ongoing
                }
            });

        Self {
            board,
            history: MoveHistory::new(),
            result,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Borrows the board mutably alongside the history, which is what the
    /// engine needs to pick a move.
    pub fn board_and_history_mut(&mut self) -> (&mut Board, &MoveHistory) {
        (&mut self.board, &self.history)
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn result(&self) -> &GameResult {
        &self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    pub fn turn(&self) -> Player {
        self.board.turn()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn empty_cells(&self) -> Vec<Cell> {
        self.board.empty_cells().collect()
    }

    /// Plays the side to move on `cell` and returns the resulting state of the
    /// game. The turn passes to the opponent only while the game goes on.
    pub fn make_move(&mut self, cell: Cell) -> Result<GameResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let player = self.board.turn();
        self.board
            .put(cell, player)
            .map_err(|error| GameError::BoardError { error })?;
        self.history.push(Move { cell, player });

        self.result = game_result(&self.board, cell);
        match &self.result {
            GameResult::Ongoing => {
                self.board.toggle_turn();
            }
            GameResult::Win { player, cells } => {
                debug!("{} wins with {:?}", player, cells);
            }
            GameResult::Draw => debug!("board is full, game drawn"),
        }

        Ok(self.result.clone())
    }

    /// Takes back the last two plies (a move and the reply to it), or one if
    /// only one was played. The side that made the earliest undone ply is to
    /// move again. Returns the number of plies undone.
    pub fn undo(&mut self) -> Result<usize, GameError> {
        if self.history.is_empty() {
            return Err(GameError::NothingToUndo);
        }

        let mut undone = 0;
        while undone < 2 {
            let played = match self.history.pop() {
                Some(played) => played,
                None => break,
            };
            self.board
                .remove(played.cell)
                .map_err(|error| GameError::BoardError { error })?;
            self.board.set_turn(played.player);
            undone += 1;
        }

        self.result = GameResult::Ongoing;
        Ok(undone)
    }

    /// Clears the game, keeping the board size unless a new one is given.
    pub fn reset(&mut self, size: Option<usize>) -> Result<(), BoardError> {
        let size = size.unwrap_or_else(|| self.board.size());
        *self = Self::new(size)?;
        Ok(())
    }
}
