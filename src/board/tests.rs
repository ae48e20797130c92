use super::*;
use crate::caro_position;

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(15).unwrap();
    assert_eq!(board.size(), 15);
    assert_eq!(board.turn(), Player::First);
    assert!(!board.has_stones());
    assert_eq!(board.center(), Cell::new(7, 7));
    assert_eq!(board.empty_cells().count(), 225);
}

#[test]
fn test_unsupported_sizes_fail_fast() {
    assert_eq!(
        Board::new(4),
        Err(BoardError::UnsupportedSize {
            size: 4,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE
        })
    );
    assert!(Board::new(MAX_BOARD_SIZE + 1).is_err());
    assert!(Board::new(MIN_BOARD_SIZE).is_ok());
}

#[test]
fn test_put_never_overwrites() {
    let mut board = Board::default();
    let cell = Cell::new(3, 4);
    board.put(cell, Player::First).unwrap();
    assert_eq!(
        board.put(cell, Player::Second),
        Err(BoardError::CellOccupied { cell })
    );
    assert_eq!(board.get(cell), Some(Player::First));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_put_out_of_bounds() {
    let mut board = Board::new(5).unwrap();
    let cell = Cell::new(5, 0);
    assert_eq!(
        board.put(cell, Player::First),
        Err(BoardError::OutOfBounds { cell, size: 5 })
    );
    assert!(!board.is_empty(cell));
}

#[test]
fn test_put_then_remove_restores_board() {
    let mut board = caro_position! {
        .....
        .x...
        ..o..
        .....
        .....
    };
    let before = board.clone();
    let cell = Cell::new(0, 0);

    board.put(cell, Player::Second).unwrap();
    assert_ne!(board, before);
    assert_eq!(board.remove(cell), Ok(Player::Second));
    assert_eq!(board, before);
    assert_eq!(board.remove(cell), Err(BoardError::CellEmpty { cell }));
}

#[test]
fn test_from_rows_rejects_non_square_grids() {
    let rows = vec![vec![None; 5], vec![None; 5], vec![None; 4], vec![None; 5], vec![None; 5]];
    assert_eq!(
        Board::from_rows(&rows, Player::First),
        Err(BoardError::InvalidDimensions {
            row: 2,
            len: 4,
            expected: 5
        })
    );
}

#[test]
fn test_from_rows() {
    let mut rows = vec![vec![None; 6]; 6];
    rows[1][2] = Some(Player::First);
    rows[5][5] = Some(Player::Second);

    let board = Board::from_rows(&rows, Player::Second).unwrap();
    assert_eq!(board.turn(), Player::Second);
    assert_eq!(
        board.stones().collect::<Vec<_>>(),
        vec![
            (Cell::new(1, 2), Player::First),
            (Cell::new(5, 5), Player::Second)
        ]
    );
}

#[test]
fn test_full_board() {
    let board = caro_position! {
        xoxox
        xoxox
        oxoxo
        oxoxo
        xoxox
    };
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_to_ascii_marks_highlights_and_last_move() {
    let board = caro_position! {
        x....
        .o...
        .....
        .....
        .....
    };
    let ascii = board.to_ascii_with(&[Cell::new(0, 0)], Some(Cell::new(1, 1)));
    let lines: Vec<&str> = ascii.lines().collect();
    assert_eq!(lines[0], "     0  1  2  3  4");
    assert_eq!(lines[1], " 0 (x) .  .  .  . ");
    assert_eq!(lines[2], " 1  . [o] .  .  . ");
}
