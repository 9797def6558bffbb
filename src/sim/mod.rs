//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per host frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod frame_loop;
pub mod obstacles;
pub mod session;
pub mod starfield;
pub mod state;
pub mod tick;

pub use collision::{check_collision, first_collision};
pub use difficulty::{Difficulty, DifficultyProfile, select};
pub use frame_loop::{FrameHost, GameLoop};
pub use obstacles::{Obstacle, ObstacleField};
pub use session::{Command, GameSession};
pub use starfield::{Star, Starfield};
pub use state::{Direction, GamePhase, GameState, Lane, Player};
pub use tick::{TickOutcome, tick};
