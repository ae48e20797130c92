use crate::board::{Board, Cell, Player, DIRECTIONS};

pub mod pattern_table;

pub use pattern_table::{pattern_score, FIVE};

/// Shape of a run through a cell along one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineShape {
    /// Contiguous stones of the player, the cell itself included.
    pub count: usize,
    /// Number of run ends (0, 1 or 2) followed by an in-bounds empty cell.
    pub open_ends: usize,
}

/// Walks from `cell` in direction `(dr, dc)` while the stones belong to `player`.
/// Returns the number of stones passed and whether the end is open.
#[inline(always)]
fn walk(board: &Board, cell: Cell, dr: isize, dc: isize, player: Player) -> (usize, bool) {
    let size = board.size();
    let mut count = 0;
    let mut current = cell;
    loop {
        match current.offset(dr, dc, size) {
            Some(next) => match board.get(next) {
                Some(stone) if stone == player => {
                    count += 1;
                    current = next;
                }
                Some(_) => return (count, false),
                None => return (count, true),
            },
            // off the board counts as blocked
            None => return (count, false),
        }
    }
}

/// Measures the run of `player` through `cell` along `(dr, dc)`, treating `cell`
/// as the player's stone whatever it currently holds.
#[inline]
pub fn analyze_line(
    board: &Board,
    cell: Cell,
    dr: isize,
    dc: isize,
    player: Player,
) -> LineShape {
    let (forward, forward_open) = walk(board, cell, dr, dc, player);
    let (backward, backward_open) = walk(board, cell, -dr, -dc, player);

    LineShape {
        count: 1 + forward + backward,
        open_ends: forward_open as usize + backward_open as usize,
    }
}

#[inline]
pub fn score_line(board: &Board, cell: Cell, dr: isize, dc: isize, player: Player) -> i32 {
    let shape = analyze_line(board, cell, dr, dc, player);
    pattern_score(shape.count, shape.open_ends)
}

/// Sum of `score_line` over the four axes.
#[inline]
pub fn score_cell(board: &Board, cell: Cell, player: Player) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| score_line(board, cell, dr, dc, player))
        .sum()
}

/// Static evaluation from the perspective of `maximizer`: the cell scores of its
/// stones minus the cell scores of the opponent's stones.
pub fn evaluate_board(board: &Board, maximizer: Player) -> i32 {
    board
        .stones()
        .map(|(cell, player)| {
            let score = score_cell(board, cell, player);
            if player == maximizer {
                score
            } else {
                -score
            }
        })
        .sum()
}
