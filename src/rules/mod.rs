//! Win detection for five-in-a-row.
//!
//! A player wins by owning `WIN_CONDITION` or more contiguous cells along a row,
//! a column or either diagonal. Overlines (more than five in a row) also win.
//!
//! Two checks are offered:
//! - [`check_win_fast`] only counts stones and allocates nothing. The search calls
//!   it once per node, so its cost is bounded by the run length, not the board size.
//! - [`winning_line`] collects the cells of the run for reporting and highlighting.

use crate::board::{Board, Cell, Player, DIRECTIONS, WIN_CONDITION};

/// Outcome of a game after a move has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    /// `cells` always holds exactly `WIN_CONDITION` cells, in line order.
    Win { player: Player, cells: Vec<Cell> },
    Draw,
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Win { player, .. } => Some(*player),
            _ => None,
        }
    }
}

/// Counts the stones of `player` stepping away from `cell` in direction `(dr, dc)`,
/// not counting `cell` itself. Stops at the first mismatch, the board edge, or
/// after `limit` stones.
#[inline]
fn run_length(
    board: &Board,
    cell: Cell,
    dr: isize,
    dc: isize,
    player: Player,
    limit: usize,
) -> usize {
    let size = board.size();
    let mut count = 0;
    let mut current = cell;
    while count < limit {
        match current.offset(dr, dc, size) {
            Some(next) if board.get(next) == Some(player) => {
                count += 1;
                current = next;
            }
            _ => break,
        }
    }
    count
}

/// Returns true if the stone on `cell` is part of a run of at least
/// `WIN_CONDITION` stones. An empty cell never wins.
#[inline]
pub fn check_win_fast(board: &Board, cell: Cell) -> bool {
    let player = match board.get(cell) {
        Some(player) => player,
        None => return false,
    };

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = run_length(board, cell, dr, dc, player, WIN_CONDITION - 1);
        let backward = run_length(board, cell, -dr, -dc, player, WIN_CONDITION - 1);
        1 + forward + backward >= WIN_CONDITION
    })
}

/// Returns the winning run through `cell`, in line order, or `None` if the stone
/// on `cell` does not complete one. At most `WIN_CONDITION - 1` cells are
/// collected on each side of `cell`, so an overline yields between
/// `WIN_CONDITION` and `2 * WIN_CONDITION - 1` cells.
pub fn winning_line(board: &Board, cell: Cell) -> Option<Vec<Cell>> {
    let player = board.get(cell)?;
    let size = board.size();

    for &(dr, dc) in DIRECTIONS.iter() {
        let backward = run_length(board, cell, -dr, -dc, player, WIN_CONDITION - 1);
        let forward = run_length(board, cell, dr, dc, player, WIN_CONDITION - 1);
        if 1 + backward + forward < WIN_CONDITION {
            continue;
        }

        let start = cell.offset(-dr * backward as isize, -dc * backward as isize, size)?;
        let line = (0..=(backward + forward) as isize)
            .filter_map(|step| start.offset(dr * step, dc * step, size))
            .collect();
        return Some(line);
    }

    None
}

/// Picks the `WIN_CONDITION` cells to report from a winning run: the earliest
/// window, in line order, that still contains `cell`.
pub fn winning_five(line: &[Cell], cell: Cell) -> Option<Vec<Cell>> {
    if line.len() < WIN_CONDITION {
        return None;
    }
    let position = line.iter().position(|&c| c == cell)?;
    let start = position.saturating_sub(WIN_CONDITION - 1);
    Some(line[start..start + WIN_CONDITION].to_vec())
}

/// Determines the game result after a stone has been placed on `last_move`.
pub fn game_result(board: &Board, last_move: Cell) -> GameResult {
    if let Some(player) = board.get(last_move) {
        let five = winning_line(board, last_move).and_then(|line| winning_five(&line, last_move));
        if let Some(cells) = five {
            return GameResult::Win { player, cells };
        }
    }

    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caro_position;

    #[test]
    fn test_horizontal_five() {
        let board = caro_position! {
            .......
            .......
            .xxxxx.
            .......
            .......
            oooo...
            .......
        };

        let cell = Cell::new(2, 3);
        assert!(check_win_fast(&board, cell));
        let line = winning_line(&board, cell).unwrap();
        assert_eq!(
            line,
            (1..=5).map(|col| Cell::new(2, col)).collect::<Vec<_>>()
        );
        assert!(!check_win_fast(&board, Cell::new(5, 0)));
        assert_eq!(winning_line(&board, Cell::new(5, 0)), None);
    }

    #[test]
    fn test_diagonal_fives() {
        let board = caro_position! {
            x......
            .x....o
            ..x..o.
            ...xo..
            ...ox..
            ..o....
            .......
        };

        assert!(check_win_fast(&board, Cell::new(0, 0)));
        assert_eq!(
            winning_line(&board, Cell::new(2, 2)).unwrap(),
            (0..5).map(|i| Cell::new(i, i)).collect::<Vec<_>>()
        );

        assert!(check_win_fast(&board, Cell::new(5, 2)));
        assert_eq!(
            winning_line(&board, Cell::new(5, 2)).unwrap(),
            vec![
                Cell::new(1, 6),
                Cell::new(2, 5),
                Cell::new(3, 4),
                Cell::new(4, 3),
                Cell::new(5, 2),
            ]
        );
    }

    #[test]
    fn test_vertical_five_at_edge() {
        let board = caro_position! {
            ....o
            ....o
            ....o
            ....o
            ....o
        };
        let line = winning_line(&board, Cell::new(4, 4)).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line.first(), Some(&Cell::new(0, 4)));
        assert_eq!(line.last(), Some(&Cell::new(4, 4)));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let board = caro_position! {
            .......
            .xxxx..
            .......
            .......
            .......
            .......
            .......
        };
        for col in 1..=4 {
            assert!(!check_win_fast(&board, Cell::new(1, col)));
        }
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::default();
        assert!(!check_win_fast(&board, Cell::new(7, 7)));
        assert_eq!(winning_line(&board, Cell::new(7, 7)), None);
    }

    #[test]
    fn test_overline_wins_and_reports_five() {
        let board = caro_position! {
            .........
            .........
            .........
            .........
            xxxxxxx..
            .........
            .........
            .........
            .........
        };

        let cell = Cell::new(4, 6);
        assert!(check_win_fast(&board, cell));
        let line = winning_line(&board, cell).unwrap();
        assert_eq!(
            line,
            (2..=6).map(|col| Cell::new(4, col)).collect::<Vec<_>>(),
            "collection is capped at four cells behind the played stone"
        );

        let middle = Cell::new(4, 3);
        let line = winning_line(&board, middle).unwrap();
        assert_eq!(line.len(), 7);
        assert_eq!(
            winning_five(&line, middle).unwrap(),
            (0..5).map(|col| Cell::new(4, col)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_fast_and_detailed_checks_agree() {
        let board = caro_position! {
            xxxxx..o.
            o.o.o.o..
            .x.x.x.x.
            ..xoooooo
            .x..x...x
            x....x..x
            ooooxxxx.
            .x.x.x.xx
            o.o.oxo.x
        };

        for cell in board.cells() {
            let fast = check_win_fast(&board, cell);
            let detailed = winning_line(&board, cell);
            match detailed {
                Some(line) => {
                    assert!(fast, "{} has a line but fast check disagrees", cell);
                    assert!(line.len() >= WIN_CONDITION);
                    assert!(line.contains(&cell));
                }
                None => assert!(!fast, "{} wins by fast check only", cell),
            }
        }
    }

    #[test]
    fn test_game_result() {
        let mut board = caro_position! {
            .....
            xxxx.
            oooo.
            .....
            .....
        };
        let cell = Cell::new(1, 4);
        assert_eq!(game_result(&board, Cell::new(1, 0)), GameResult::Ongoing);

        board.put(cell, Player::First).unwrap();
        let result = game_result(&board, cell);
        assert_eq!(
            result,
            GameResult::Win {
                player: Player::First,
                cells: (0..5).map(|col| Cell::new(1, col)).collect()
            }
        );
        assert!(result.is_over());
        assert_eq!(result.winner(), Some(Player::First));
    }

    #[test]
    fn test_full_board_without_five_is_a_draw() {
        let board = caro_position! {
            xxoox
            ooxxo
            xxoox
            ooxxo
            xxoox
        };
        assert_eq!(game_result(&board, Cell::new(4, 4)), GameResult::Draw);
    }
}
