//! Difficulty presets
//!
//! A run's profile is locked in when the game starts; picking another
//! difficulty mid-run only affects the next start.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Named difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Speed and spawn parameters for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultyProfile {
    /// Obstacle fall speed (pixels per tick)
    pub move_speed: f32,
    /// Ticks between obstacle spawns
    pub spawn_interval_frames: u32,
    /// Scales every star's base speed
    pub star_speed_multiplier: f32,
    /// Display label
    pub label: &'static str,
}

const EASY: DifficultyProfile = DifficultyProfile {
    move_speed: 4.0,
    spawn_interval_frames: 70,
    star_speed_multiplier: 1.0,
    label: "EASY",
};

const MEDIUM: DifficultyProfile = DifficultyProfile {
    move_speed: 6.0,
    spawn_interval_frames: 45,
    star_speed_multiplier: 1.5,
    label: "MEDIUM",
};

const HARD: DifficultyProfile = DifficultyProfile {
    move_speed: 9.0,
    spawn_interval_frames: 30,
    star_speed_multiplier: 2.2,
    label: "HARD",
};

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => EASY,
            Difficulty::Medium => MEDIUM,
            Difficulty::Hard => HARD,
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty {
                name: s.to_string(),
            }),
        }
    }
}

/// Look up a profile by name
pub fn select(name: &str) -> Result<DifficultyProfile, GameError> {
    name.parse::<Difficulty>().map(|d| d.profile())
}
