use thiserror::Error;

use super::cell::Cell;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot place a stone on {cell}, the cell is already occupied")]
    CellOccupied { cell: Cell },
    #[error("Cannot remove a stone from {cell}, the cell is empty")]
    CellEmpty { cell: Cell },
    #[error("Cell {cell} is outside of a {size}x{size} board")]
    OutOfBounds { cell: Cell, size: usize },
    #[error("Unsupported board size {size}, expected a size between {min} and {max}")]
    UnsupportedSize { size: usize, min: usize, max: usize },
    #[error("Board rows must form a square: row {row} has {len} cells, expected {expected}")]
    InvalidDimensions {
        row: usize,
        len: usize,
        expected: usize,
    },
}
