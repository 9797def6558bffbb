//! Error types for configuration and difficulty selection
//!
//! Out-of-phase input is never an error; only bad names and bad
//! configuration surface here.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Difficulty name is not one of easy/medium/hard
    UnknownDifficulty { name: String },
    /// Configuration failed to parse or violates geometry constraints
    InvalidConfig { reason: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDifficulty { name } => {
                write!(f, "unknown difficulty: {name:?} (expected easy, medium or hard)")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for GameError {}
