use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Search depth and randomization for one difficulty level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyPolicy {
    /// Plies searched from the root, the root move included.
    pub depth: u8,
    /// Probability of skipping the search and playing one of the top
    /// candidates at random.
    pub randomization: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn policy(&self) -> DifficultyPolicy {
        match self {
            Difficulty::Easy => DifficultyPolicy {
                depth: 1,
                randomization: 0.3,
            },
            Difficulty::Medium => DifficultyPolicy {
                depth: 2,
                randomization: 0.0,
            },
            Difficulty::Hard => DifficultyPolicy {
                depth: 3,
                randomization: 0.0,
            },
        }
    }

    pub fn depth(&self) -> u8 {
        self.policy().depth
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid difficulty {input:?}; options are: easy, medium, hard")]
pub struct ParseDifficultyError {
    input: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError {
                input: input.to_string(),
            }),
        }
    }
}
