//! Game configuration
//!
//! Static screen geometry and sprite sizes. The browser builds one from the
//! window size; native runs can load one from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::Difficulty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width (pixels)
    pub screen_width: f32,
    /// Playfield height (pixels)
    pub screen_height: f32,
    /// Obstacle sprite size (pixels, square)
    pub obstacle_size: f32,
    /// Player sprite size (pixels)
    pub player_size: f32,
    /// Distance from the bottom edge to the player
    pub player_bottom_offset: f32,
    /// Number of background stars
    pub star_count: usize,
    /// Difficulty selected before the player picks one
    pub default_difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            obstacle_size: OBSTACLE_SIZE,
            player_size: PLAYER_SIZE,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,
            star_count: STAR_COUNT,
            default_difficulty: Difficulty::Easy,
        }
    }
}

impl GameConfig {
    /// Default configuration sized to a viewport
    pub fn for_viewport(width: f32, height: f32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json).map_err(|e| GameError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn lane_width(&self) -> f32 {
        self.screen_width / LANE_COUNT as f32
    }

    pub fn lane_centers(&self) -> [f32; LANE_COUNT] {
        crate::lane_centers(self.screen_width)
    }

    /// Y coordinate the collision check measures obstacles against
    pub fn player_bottom_y(&self) -> f32 {
        self.screen_height - self.player_bottom_offset
    }

    /// Obstacles below this y have left the screen
    pub fn obstacle_despawn_y(&self) -> f32 {
        self.screen_height + self.obstacle_size
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("obstacle_size", self.obstacle_size),
            ("player_size", self.player_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidConfig {
                    reason: format!("{name} must be a positive number, got {value}"),
                });
            }
        }
        if !self.player_bottom_offset.is_finite() || self.player_bottom_offset < 0.0 {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "player_bottom_offset must be non-negative, got {}",
                    self.player_bottom_offset
                ),
            });
        }
        // Adjacent lanes must never fall inside the horizontal hit range
        if self.lane_width() < HIT_RANGE_X {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "screen_width {} gives lanes {:.1}px apart, need at least {HIT_RANGE_X}",
                    self.screen_width,
                    self.lane_width()
                ),
            });
        }
        Ok(())
    }
}
