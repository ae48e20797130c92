use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// The two sides of a game. `First` is displayed as X and always opens the game.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    First = 0,
    Second = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    pub fn opponent(&self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Lowercase stone character used by the position notation.
    pub fn symbol(&self) -> char {
        match self {
            Player::First => 'x',
            Player::Second => 'o',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'x' | 'X' => Some(Player::First),
            'o' | 'O' => Some(Player::Second),
            _ => None,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match Self::ALL.choose(rng) {
            Some(player) => *player,
            None => Player::First,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::First => "X",
            Player::Second => "O",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player.to_lowercase().as_str() {
            "x" | "first" => Ok(Player::First),
            "o" | "second" => Ok(Player::Second),
            _ => Err("invalid player; options are: x, o"),
        }
    }
}
