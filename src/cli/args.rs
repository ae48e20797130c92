//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(name = "caro", about = "A five-in-a-row engine implemented in Rust")]
pub enum Caro {
    #[structopt(
        name = "play",
        about = "Play a game against the computer at the given `--difficulty` (easy, medium or hard; default: medium) on a `--size` by `--size` board (default: 15). Who moves first is chosen at random unless you specify it with `--first` (human, engine or random). Enter moves as `row col`; type `undo` to take back your last move and `quit` to leave."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--difficulty` (default: medium), pausing `--delay` milliseconds between moves."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Use the engine to determine the best move from a given position, provided in position notation with `--position` (required), e.g. `15/15/15/15/15/15/15/7x7/15/15/15/15/15/15/15 o`. The search strength is set with `--difficulty` (default: medium)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
}

impl crate::cli::commands::Command for Caro {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
        }
    }
}
