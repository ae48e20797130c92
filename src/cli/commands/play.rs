//! Play command - play a game against the computer.

use std::fmt;
use std::str::FromStr;

use caro::board::Player;
use caro::game::difficulty::Difficulty;
use caro::game::input_source::ConditionalInput;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use structopt::StructOpt;

use super::util::{create_config, create_engine, run_game_loop};
use super::Command;

/// Who opens the game. The opening side always plays X.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstMove {
    Human,
    Engine,
    Random,
}

impl FromStr for FirstMove {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "human" => Ok(FirstMove::Human),
            "engine" | "computer" => Ok(FirstMove::Engine),
            "random" => Ok(FirstMove::Random),
            _ => Err("invalid first player; options are: human, engine, random"),
        }
    }
}

impl fmt::Display for FirstMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FirstMove::Human => "human",
            FirstMove::Engine => "engine",
            FirstMove::Random => "random",
        };
        write!(f, "{}", name)
    }
}

impl FirstMove {
    fn human_player<R: Rng>(self, rng: &mut R) -> Player {
        match self {
            FirstMove::Human => Player::First,
            FirstMove::Engine => Player::Second,
            FirstMove::Random => Player::random(rng),
        }
    }
}

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(short, long, default_value = "15")]
    pub size: usize,
    #[structopt(short, long, default_value = "random")]
    pub first: FirstMove,
    #[structopt(long, help = "Seed for the engine's random choices")]
    pub seed: Option<u64>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let human_player = self.first.human_player(&mut rng);
        let config = create_config(self.difficulty, self.size);
        let engine = create_engine(config, self.seed);

        run_game_loop(ConditionalInput { human_player }, engine, None);
    }
}

