use std::time::Duration;

use log::{debug, warn};

use crate::board::BoardError;
use crate::game::display::GameDisplay;
use crate::game::engine::Engine;
use crate::game::input_source::InputSource;
use crate::game::session::Game;
use crate::input_handler::{InputError, MoveInput};
use crate::rules::GameResult;

/// Drives a game from start to finish, asking `T` for each move and rendering
/// the board between plies.
pub struct GameLoop<T: InputSource> {
    game: Game,
    engine: Engine,
    ui: GameDisplay,
    input: T,
    /// The engine answers almost instantly, so engine-only games pause between
    /// plies to be watchable.
    frame_delay: Option<Duration>,
    status: Option<String>,
}

impl<T: InputSource> GameLoop<T> {
    /// A new game on a board of the engine's configured size.
    pub fn new(input: T, engine: Engine) -> Result<Self, BoardError> {
        Ok(Self {
            game: Game::new(engine.config().board_size)?,
            engine,
            ui: GameDisplay::new(),
            input,
            frame_delay: None,
            status: None,
        })
    }

    pub fn with_frame_delay(mut self, delay: Option<Duration>) -> Self {
        self.frame_delay = delay;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until the game ends or the player quits, and returns the result
    /// (`Ongoing` if the game was abandoned).
    pub fn run(&mut self) -> GameResult {
        loop {
            self.render();
            if self.game.is_over() {
                break;
            }

            let current_turn = self.game.turn();
            if self.input.is_human(current_turn) {
                self.ui.render_prompt(current_turn);
            }

            match self.input.get_move(current_turn) {
                Ok(Some(input)) => {
                    if !self.apply_input(input) {
                        break;
                    }
                }
                Ok(None) => self.status = Some("Invalid input".to_string()),
                Err(InputError::UserExit) => break,
                Err(error) => {
                    warn!("stopping the game: {}", error);
                    println!("error: {}", error);
                    break;
                }
            }
        }

        self.game.result().clone()
    }

    fn render(&mut self) {
        let stats = self.engine.get_search_stats();
        let last_move = self.game.last_move().map(|played| played.cell);
        self.ui
            .render_game_state(self.game.board(), self.game.result(), last_move, Some(&stats));
        if let Some(status) = self.status.take() {
            println!("{}", status);
        }
    }

    /// Returns false when the game cannot continue.
    fn apply_input(&mut self, input: MoveInput) -> bool {
        match input {
            MoveInput::Coordinate { cell } => {
                if let Err(error) = self.game.make_move(cell) {
                    self.status = Some(format!("error: {}", error));
                }
            }
            MoveInput::Undo => match self.game.undo() {
                Ok(count) => debug!("undid {} plies", count),
                Err(error) => self.status = Some(format!("error: {}", error)),
            },
            MoveInput::UseEngine => match self.engine.make_best_move(&mut self.game) {
                Ok((cell, _)) => {
                    debug!("engine played {}", cell);
                    if let Some(delay) = self.frame_delay {
                        std::thread::sleep(delay);
                    }
                }
                Err(error) => {
                    warn!("engine failed to move: {}", error);
                    println!("error: {}", error);
                    return false;
                }
            },
        }
        true
    }
}
