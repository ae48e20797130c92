//! Shared utilities for CLI commands.

use caro::game::difficulty::Difficulty;
use caro::game::engine::{Engine, EngineConfig};
use caro::game::input_source::InputSource;
use caro::game::r#loop::GameLoop;
use caro::rules::GameResult;
use std::time::Duration;

pub(crate) fn create_config(difficulty: Difficulty, board_size: usize) -> EngineConfig {
    EngineConfig {
        difficulty,
        board_size,
    }
}

pub(crate) fn create_engine(config: EngineConfig, seed: Option<u64>) -> Engine {
    match seed {
        Some(seed) => Engine::seeded(config, seed),
        None => Engine::with_config(config),
    }
}

pub(crate) fn run_game_loop<I>(input_source: I, engine: Engine, delay: Option<Duration>)
where
    I: InputSource,
{
    let mut game = match GameLoop::new(input_source, engine) {
        Ok(game) => game.with_frame_delay(delay),
        Err(error) => {
            eprintln!("Failed to start the game: {}", error);
            std::process::exit(1);
        }
    };

    match game.run() {
        GameResult::Win { player, .. } => println!("{} wins!", player),
        GameResult::Draw => println!("Draw!"),
        GameResult::Ongoing => println!("Game abandoned."),
    }
}
