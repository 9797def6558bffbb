//! Lane Dodger - A three-lane asteroid dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, game state)
//! - `renderer`: Per-frame snapshot for presentation, DOM renderer on web
//! - `platform`: Browser input translation
//! - `config`: Screen geometry and startup configuration

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::GameError;

/// Game configuration constants
pub mod consts {
    /// Number of lanes the player and obstacles occupy
    pub const LANE_COUNT: usize = 3;

    /// Sprite sizes (pixels)
    pub const OBSTACLE_SIZE: f32 = 50.0;
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Distance from the bottom of the screen to the player's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 100.0;

    /// Collision hit-box (pixels). Independent of sprite sizes.
    pub const HIT_RANGE_X: f32 = 30.0;
    pub const HIT_RANGE_Y: f32 = 50.0;

    /// Starfield defaults
    pub const STAR_COUNT: usize = 150;
    pub const STAR_MIN_SPEED: f32 = 1.0;
    pub const STAR_MAX_SPEED: f32 = 3.0;
    /// How far past the bottom edge a star travels before it wraps to the top
    pub const STAR_WRAP_MARGIN: f32 = 10.0;

    /// Fallback viewport when no window size is known (native runs)
    pub const DEFAULT_SCREEN_WIDTH: f32 = 800.0;
    pub const DEFAULT_SCREEN_HEIGHT: f32 = 600.0;
}

/// Lane center x-coordinates for a screen of the given width
#[inline]
pub fn lane_centers(screen_width: f32) -> [f32; consts::LANE_COUNT] {
    let lane_width = screen_width / consts::LANE_COUNT as f32;
    [
        lane_width / 2.0,
        screen_width / 2.0,
        screen_width - lane_width / 2.0,
    ]
}
