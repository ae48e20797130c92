use std::fmt;

/// A board coordinate. Row 0 is the top row, column 0 the leftmost column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps `(dr, dc)` away from this cell. Returns `None` once the step leaves
    /// a `size`x`size` board.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Cell> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < size && col < size {
            Some(Cell { row, col })
        } else {
            None
        }
    }

    pub fn chebyshev_distance(self, other: Cell) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}
