pub mod cell;
pub mod error;
pub mod player;

mod display;

#[cfg(test)]
mod tests;

pub use cell::Cell;
pub use error::BoardError;
pub use player::Player;

pub const DEFAULT_BOARD_SIZE: usize = 15;
pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 30;

/// Number of contiguous stones needed to win.
pub const WIN_CONDITION: usize = 5;

/// The four line axes, each scanned in both directions: horizontal, vertical,
/// diagonal `\` and diagonal `/`.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Represents the state of a square board: the stones on it and the side to move.
///
/// Stones are only ever removed by `remove`, which exists for the search's
/// make/unmake. The search shares one board across all of its frames, so a board
/// must not be searched from two places at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
    turn: Player,
    stone_count: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![None; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
            turn: Player::First,
            stone_count: 0,
        }
    }
}

impl Board {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::UnsupportedSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }

        Ok(Self {
            size,
            cells: vec![None; size * size],
            turn: Player::First,
            stone_count: 0,
        })
    }

    /// Builds a board from a row-major grid. Every row must be as long as there
    /// are rows.
    pub fn from_rows(rows: &[Vec<Option<Player>>], turn: Player) -> Result<Self, BoardError> {
        let mut board = Self::new(rows.len())?;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != board.size {
                return Err(BoardError::InvalidDimensions {
                    row,
                    len: cells.len(),
                    expected: board.size,
                });
            }
            for (col, stone) in cells.iter().enumerate() {
                if let Some(player) = stone {
                    board.put(Cell::new(row, col), *player)?;
                }
            }
        }
        board.set_turn(turn);
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn toggle_turn(&mut self) -> Player {
        self.turn = self.turn.opponent();
        self.turn
    }

    pub fn set_turn(&mut self, turn: Player) -> Player {
        self.turn = turn;
        turn
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Returns the stone on `cell`. Cells off the board read as empty here;
    /// callers that need to tell the two apart step with `Cell::offset`.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Player> {
        if self.in_bounds(cell) {
            self.cells[self.index(cell)]
        } else {
            None
        }
    }

    /// True only for in-bounds cells without a stone.
    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.cells[self.index(cell)].is_none()
    }

    pub fn put(&mut self, cell: Cell, player: Player) -> Result<(), BoardError> {
        let index = self.checked_index(cell)?;
        if self.cells[index].is_some() {
            return Err(BoardError::CellOccupied { cell });
        }

        self.cells[index] = Some(player);
        self.stone_count += 1;
        Ok(())
    }

    pub fn remove(&mut self, cell: Cell) -> Result<Player, BoardError> {
        let index = self.checked_index(cell)?;
        let player = self.cells[index]
            .take()
            .ok_or(BoardError::CellEmpty { cell })?;
        self.stone_count -= 1;
        Ok(player)
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.size / 2, self.size / 2)
    }

    pub fn stone_count(&self) -> usize {
        self.stone_count
    }

    pub fn has_stones(&self) -> bool {
        self.stone_count > 0
    }

    pub fn is_full(&self) -> bool {
        self.stone_count == self.cells.len()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cells.len()).map(move |index| self.cell_at(index))
    }

    /// Every stone on the board, in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Cell, Player)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, stone)| stone.map(|player| (self.cell_at(index), player)))
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, stone)| stone.is_none())
            .map(move |(index, _)| self.cell_at(index))
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.row * self.size + cell.col
    }

    #[inline]
    fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.size, index % self.size)
    }

    fn checked_index(&self, cell: Cell) -> Result<usize, BoardError> {
        if self.in_bounds(cell) {
            Ok(self.index(cell))
        } else {
            Err(BoardError::OutOfBounds {
                cell,
                size: self.size,
            })
        }
    }
}
