//! Read model handed to the renderer after each frame
//!
//! Everything a display needs, in screen pixels, with no access back into
//! the session.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GamePhase, GameSession};

/// A positioned sprite. `pos` is the sprite's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    /// Degrees, cosmetic
    pub rotation: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub final_score: Option<u32>,
    pub difficulty: &'static str,
    pub player: Sprite,
    pub stars: Vec<Sprite>,
    pub obstacles: Vec<Sprite>,
}

impl FrameSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        let config = session.config();
        let centers = session.lane_centers();

        let player = Sprite {
            id: 0,
            pos: Vec2::new(
                centers[session.player().lane.index()] - config.player_size / 2.0,
                session.player_bottom_y(),
            ),
            size: config.player_size,
            rotation: 0.0,
            opacity: 1.0,
        };

        let stars = session
            .stars()
            .iter()
            .enumerate()
            .map(|(i, star)| Sprite {
                id: i as u32,
                pos: star.pos,
                size: star.size,
                rotation: 0.0,
                opacity: star.opacity,
            })
            .collect();

        let obstacles = session
            .obstacles()
            .iter()
            .map(|obstacle| Sprite {
                id: obstacle.id,
                pos: Vec2::new(
                    centers[obstacle.lane.index()] - config.obstacle_size / 2.0,
                    obstacle.y,
                ),
                size: config.obstacle_size,
                rotation: obstacle.rotation_deg,
                opacity: 1.0,
            })
            .collect();

        Self {
            phase: session.phase(),
            score: session.score(),
            final_score: session.final_score(),
            difficulty: session.active_difficulty().label,
            player,
            stars,
            obstacles,
        }
    }

    /// JSON form for hosts that render outside Rust
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
