//! Watch command - watch the computer play against itself.

use std::time::Duration;

use caro::game::difficulty::Difficulty;
use caro::game::input_source::EngineInput;
use structopt::StructOpt;

use super::util::{create_config, create_engine, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(short, long, default_value = "15")]
    pub size: usize,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long, help = "Seed for the engine's random choices")]
    pub seed: Option<u64>,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.difficulty, self.size);
        let engine = create_engine(config, self.seed);
        let delay = Some(Duration::from_millis(self.delay_ms)).filter(|d| !d.is_zero());

        run_game_loop(EngineInput, engine, delay);
    }
}
