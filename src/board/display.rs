use std::fmt::{self, Write};

use super::{Board, Cell};

impl Board {
    /// Renders the board as a grid of `.`, `x` and `o`, with row and column
    /// indices along the edges. Cells in `highlight` are drawn as `(x)`, the
    /// `last_move` cell as `[x]`.
    pub fn to_ascii_with(&self, highlight: &[Cell], last_move: Option<Cell>) -> String {
        let mut out = String::with_capacity((self.size + 2) * (self.size * 3 + 4));

        out.push_str("   ");
        for col in 0..self.size {
            let _ = write!(out, "{:>3}", col);
        }
        out.push('\n');

        for row in 0..self.size {
            let _ = write!(out, "{:>2} ", row);
            for col in 0..self.size {
                let cell = Cell::new(row, col);
                let stone = self.get(cell).map_or('.', |player| player.symbol());
                let (open, close) = if highlight.contains(&cell) {
                    ('(', ')')
                } else if last_move == Some(cell) {
                    ('[', ']')
                } else {
                    (' ', ' ')
                };
                out.push(open);
                out.push(stone);
                out.push(close);
            }
            out.push('\n');
        }

        out
    }

    pub fn to_ascii(&self) -> String {
        self.to_ascii_with(&[], None)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ascii())
    }
}

/// Lays out a board visually, one character per cell: `.` empty, `x` first
/// player, `o` second player. The board size is taken from the number of cells,
/// which must be a perfect square. The first player is to move.
#[macro_export]
macro_rules! caro_position {
    ($($cell:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<char> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        let size = (1..=cells.len())
            .find(|n| n * n >= cells.len())
            .unwrap_or(0);
        assert_eq!(size * size, cells.len(), "Invalid number of cells. Expected a square board, got {}", cells.len());
        let mut board = $crate::board::Board::new(size).expect("board size should be supported");
        for (i, &c) in cells.iter().enumerate() {
            if c == '.' {
                continue;
            }
            let player = $crate::board::Player::from_symbol(c)
                .unwrap_or_else(|| panic!("Invalid cell character: {}", c));
            board
                .put($crate::board::Cell::new(i / size, i % size), player)
                .expect("cell should be empty");
        }
        board
    }};
}
