//! Text notation for board positions.
//!
//! Rows are listed top to bottom and separated by `/`. Within a row `x` and `o`
//! are stones and a decimal number is a run of empty cells. A space and the side
//! to move (`x` or `o`) follow the rows. An empty 5x5 board with X to move is
//! `5/5/5/5/5 x`.

use std::str::FromStr;

use thiserror::Error;

use crate::board::{error::BoardError, Board, Cell, Player};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PositionParseError {
    #[error("Wrong number of fields: expected rows and side to move, got {field_count}")]
    WrongNumberOfFields { field_count: usize },
    #[error("Invalid cell character: {invalid_character:?}")]
    InvalidCellCharacter { invalid_character: char },
    #[error("Row {row} has {len} cells, expected {expected}: {invalid_row:?}")]
    InvalidRowLength {
        row: usize,
        len: usize,
        expected: usize,
        invalid_row: String,
    },
    #[error("Invalid side to move: {invalid_turn:?}")]
    InvalidTurn { invalid_turn: String },
    #[error("Invalid board: {board_error}")]
    InvalidBoard { board_error: BoardError },
}

type PositionResult<T> = Result<T, PositionParseError>;

/// Parses a position string into a board.
pub fn parse_position(position: &str) -> PositionResult<Board> {
    let fields: Vec<&str> = position.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(PositionParseError::WrongNumberOfFields {
            field_count: fields.len(),
        });
    }

    let rows: Vec<&str> = fields[0].split('/').collect();
    let size = rows.len();
    let grid = rows
        .iter()
        .enumerate()
        .map(|(index, row)| parse_row(row, index, size))
        .collect::<PositionResult<Vec<_>>>()?;
    let turn = parse_turn(fields[1])?;

    Board::from_rows(&grid, turn).map_err(|board_error| PositionParseError::InvalidBoard { board_error })
}

fn parse_row(row: &str, index: usize, expected: usize) -> PositionResult<Vec<Option<Player>>> {
    let too_long = || PositionParseError::InvalidRowLength {
        row: index,
        len: expected + 1,
        expected,
        invalid_row: row.to_string(),
    };
    let mut cells = Vec::with_capacity(expected);
    let mut empty_run = 0usize;

    for c in row.chars() {
        if let Some(digit) = c.to_digit(10) {
            empty_run = empty_run
                .checked_mul(10)
                .and_then(|run| run.checked_add(digit as usize))
                .filter(|&run| cells.len() + run <= expected)
                .ok_or_else(too_long)?;
            continue;
        }
        cells.extend(std::iter::repeat(None).take(empty_run));
        empty_run = 0;

        let player = Player::from_symbol(c).ok_or(PositionParseError::InvalidCellCharacter {
            invalid_character: c,
        })?;
        if cells.len() == expected {
            return Err(too_long());
        }
        cells.push(Some(player));
    }
    cells.extend(std::iter::repeat(None).take(empty_run));

    if cells.len() != expected {
        return Err(PositionParseError::InvalidRowLength {
            row: index,
            len: cells.len(),
            expected,
            invalid_row: row.to_string(),
        });
    }

    Ok(cells)
}

fn parse_turn(turn: &str) -> PositionResult<Player> {
    let mut chars = turn.chars();
    match (chars.next().and_then(Player::from_symbol), chars.next()) {
        (Some(player), None) => Ok(player),
        _ => Err(PositionParseError::InvalidTurn {
            invalid_turn: turn.to_string(),
        }),
    }
}

impl Board {
    /// Serializes the board into position notation.
    pub fn to_position(&self) -> String {
        let size = self.size();
        let mut rows = Vec::with_capacity(size);

        for row in 0..size {
            let mut encoded = String::new();
            let mut empty_run = 0;
            for col in 0..size {
                match self.get(Cell::new(row, col)) {
                    Some(player) => {
                        if empty_run > 0 {
                            encoded.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        encoded.push(player.symbol());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                encoded.push_str(&empty_run.to_string());
            }
            rows.push(encoded);
        }

        format!("{} {}", rows.join("/"), self.turn().symbol())
    }
}

impl FromStr for Board {
    type Err = PositionParseError;

    fn from_str(position: &str) -> Result<Self, Self::Err> {
        parse_position(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caro_position;

    #[test]
    fn test_parse_empty_board() {
        let board: Board = "5/5/5/5/5 x".parse().unwrap();
        assert_eq!(board.size(), 5);
        assert!(!board.has_stones());
        assert_eq!(board.turn(), Player::First);
    }

    #[test]
    fn test_parse_stones_and_turn() {
        let board = parse_position("x4/1o3/5/3x1/4o o").unwrap();
        assert_eq!(board.get(Cell::new(0, 0)), Some(Player::First));
        assert_eq!(board.get(Cell::new(1, 1)), Some(Player::Second));
        assert_eq!(board.get(Cell::new(3, 3)), Some(Player::First));
        assert_eq!(board.get(Cell::new(4, 4)), Some(Player::Second));
        assert_eq!(board.stone_count(), 4);
        assert_eq!(board.turn(), Player::Second);
    }

    #[test]
    fn test_multi_digit_runs() {
        let empty_row = "15";
        let rows = vec![empty_row; 15].join("/");
        let board = parse_position(&format!("{} x", rows)).unwrap();
        assert_eq!(board.size(), 15);

        let mut board = Board::default();
        board.put(Cell::new(7, 7), Player::First).unwrap();
        board.set_turn(Player::Second);
        let position = board.to_position();
        assert!(position.contains("/7x7/"));
        assert!(position.starts_with("15/15/"));
        assert!(position.ends_with(" o"));
    }

    #[test]
    fn test_position_survives_serialization() {
        let board = caro_position! {
            .......
            ..x....
            ...o...
            ...xo..
            .......
            o.....x
            .......
        };
        let position = board.to_position();
        assert_eq!(position, "7/2x4/3o3/3xo2/7/o5x/7 x");
        assert_eq!(parse_position(&position).unwrap(), board);
    }

    #[test]
    fn test_invalid_positions() {
        assert_eq!(
            parse_position("5/5/5/5/5"),
            Err(PositionParseError::WrongNumberOfFields { field_count: 1 })
        );
        assert_eq!(
            parse_position("5/5/5/5/4z x"),
            Err(PositionParseError::InvalidCellCharacter {
                invalid_character: 'z'
            })
        );
        assert!(matches!(
            parse_position("5/5/6/5/5 x"),
            Err(PositionParseError::InvalidRowLength { row: 2, .. })
        ));
        assert!(matches!(
            parse_position("5/5/4/5/5 x"),
            Err(PositionParseError::InvalidRowLength { row: 2, len: 4, .. })
        ));
        assert_eq!(
            parse_position("5/5/5/5/5 w"),
            Err(PositionParseError::InvalidTurn {
                invalid_turn: "w".to_string()
            })
        );
        assert!(matches!(
            parse_position("4/4/4/4 x"),
            Err(PositionParseError::InvalidBoard {
                board_error: BoardError::UnsupportedSize { size: 4, .. }
            })
        ));
    }

    #[test]
    fn test_oversized_runs_are_rejected_without_expanding() {
        let overflowing = parse_position("99999999999999999999999/5/5/5/5 x");
        assert!(matches!(
            overflowing,
            Err(PositionParseError::InvalidRowLength { row: 0, expected: 5, .. })
        ));

        let huge = parse_position("1099511627776/5/5/5/5 x");
        assert!(matches!(
            huge,
            Err(PositionParseError::InvalidRowLength { row: 0, expected: 5, .. })
        ));

        // a run that fits but leaves no room for the stone after it
        assert!(matches!(
            parse_position("5/5x/5/5/5 x"),
            Err(PositionParseError::InvalidRowLength { row: 1, len: 6, .. })
        ));
        assert!(matches!(
            parse_position("5/5/5/5/3xxo o"),
            Err(PositionParseError::InvalidRowLength { row: 4, .. })
        ));
    }
}
