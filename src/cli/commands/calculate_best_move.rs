//! Calculate best move command - determine the best move from a position.

use caro::board::Board;
use caro::game::difficulty::Difficulty;
use caro::game::engine::Engine;
use caro::game::session::MoveHistory;
use structopt::StructOpt;

use super::util::{create_config, create_engine};
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(long = "position")]
    pub position: Board,
    #[structopt(long, help = "Seed for the engine's random choices")]
    pub seed: Option<u64>,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let mut board = self.position;
        let config = create_config(self.difficulty, board.size());
        let mut engine: Engine = create_engine(config, self.seed);

        let history = MoveHistory::from_stones(&board);

        match engine.get_move(&mut board, &history) {
            Ok(cell) => println!("{} {}", cell.row, cell.col),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
