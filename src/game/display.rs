use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::{Board, Cell, Player};
use crate::game::engine::SearchStats;
use crate::rules::GameResult;

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        // writing to a String cannot fail
        let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
    }

    /// Draws the board, highlighting the winning cells once the game is won,
    /// followed by whose turn it is and the last search statistics.
    pub fn render_game_state(
        &mut self,
        board: &Board,
        result: &GameResult,
        last_move: Option<Cell>,
        stats: Option<&SearchStats>,
    ) {
        self.clear();

        let highlight: &[Cell] = match result {
            GameResult::Win { cells, .. } => cells,
            _ => &[],
        };
        self.buffer.push_str(&board.to_ascii_with(highlight, last_move));
        self.buffer.push('\n');

        match result {
            GameResult::Ongoing => {
                let _ = writeln!(self.buffer, "Turn: {}", board.turn());
            }
            GameResult::Win { player, .. } => {
                let _ = writeln!(self.buffer, "{} wins!", player);
            }
            GameResult::Draw => self.buffer.push_str("Draw!\n"),
        }

        if let Some(cell) = last_move {
            let _ = writeln!(self.buffer, "Last move: {}", cell);
        }

        if let Some(stats) = stats {
            self.buffer.push('\n');
            self.buffer.push_str(&format_stats(stats));
            self.buffer.push('\n');
        }

        print!("{}", self.buffer);
    }

    pub fn render_prompt(&self, player: Player) {
        println!("{} to move. Enter `row col`, `undo` or `quit`:", player);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

pub fn format_stats(stats: &SearchStats) -> String {
    format!(
        "* Score: {}\n* Positions searched: {} (depth: {})\n* Move took: {}",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.depth,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}
