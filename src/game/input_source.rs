use crate::board::Player;
use crate::input_handler::{parse_move_input, InputError, MoveInput};

/// Where the next move of a game comes from.
pub trait InputSource {
    fn get_move(&self, current_turn: Player) -> Result<Option<MoveInput>, InputError>;

    /// Whether the player on `current_turn` types their moves in.
    fn is_human(&self, current_turn: Player) -> bool;
}

fn read_human_move() -> Result<Option<MoveInput>, InputError> {
    match parse_move_input() {
        Ok(move_input) => Ok(Some(move_input)),
        Err(InputError::UserExit) => Err(InputError::UserExit),
        Err(error @ InputError::IOError { .. }) => Err(error),
        Err(_) => Ok(None), // Other errors treated as invalid input
    }
}

pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_move(&self, _current_turn: Player) -> Result<Option<MoveInput>, InputError> {
        read_human_move()
    }

    fn is_human(&self, _current_turn: Player) -> bool {
        true
    }
}

pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_move(&self, _current_turn: Player) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::UseEngine))
    }

    fn is_human(&self, _current_turn: Player) -> bool {
        false
    }
}

pub struct ConditionalInput {
    pub human_player: Player,
}

impl InputSource for ConditionalInput {
    fn get_move(&self, current_turn: Player) -> Result<Option<MoveInput>, InputError> {
        if current_turn == self.human_player {
            read_human_move()
        } else {
            Ok(Some(MoveInput::UseEngine))
        }
    }

    fn is_human(&self, current_turn: Player) -> bool {
        current_turn == self.human_player
    }
}
