//! Move input parsing and validation.

pub mod position;

use std::io::{self, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Cell;

pub use position::{parse_position, PositionParseError};

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\s*(\d{1,2})\s*(?:,\s*|\s+)(\d{1,2})\s*\)?$")
        .expect("COORD_RE regex should be valid")
});
static UNDO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^u(ndo)?$").expect("UNDO_RE regex should be valid"));
static QUIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(q|quit|exit)$").expect("QUIT_RE regex should be valid"));

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    Coordinate { cell: Cell },
    Undo,
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if let Some(caps) = COORD_RE.captures(trimmed) {
            let row = caps[1].parse::<usize>();
            let col = caps[2].parse::<usize>();
            if let (Ok(row), Ok(col)) = (row, col) {
                return Ok(MoveInput::Coordinate {
                    cell: Cell::new(row, col),
                });
            }
        }

        if UNDO_RE.is_match(trimmed) {
            return Ok(MoveInput::Undo);
        }

        if QUIT_RE.is_match(trimmed) {
            return Err(InputError::UserExit);
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Reads one line from stdin and parses it as a move: `row col` or `row,col`,
/// `undo`, or `quit`.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    io::stdout().flush().map_err(|e| InputError::IOError {
        error: format!("Failed to flush stdout: {}", e),
    })?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| InputError::IOError {
            error: format!("Failed to read line: {}", e),
        })?;

    // end of input
    if read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}
