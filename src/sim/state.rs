//! Game state and core simulation types

use serde::Serialize;

use super::difficulty::DifficultyProfile;
use crate::consts::LANE_COUNT;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GamePhase {
    /// Start screen, waiting for `start()`
    #[default]
    NotStarted,
    /// Active gameplay, frames are ticking
    Running,
    /// Frozen mid-run
    Paused,
    /// Player hit an obstacle
    GameOver,
}

/// One of the three tracks obstacles and the player occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Lane {
    Left,
    #[default]
    Center,
    Right,
}

/// Sideways move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Lane {
    pub const ALL: [Lane; LANE_COUNT] = [Lane::Left, Lane::Center, Lane::Right];

    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Lane> {
        Self::ALL.get(index).copied()
    }

    /// Neighbouring lane in `direction`, or `None` at the edge (no wraparound)
    pub fn step(self, direction: Direction) -> Option<Lane> {
        match direction {
            Direction::Left => self.index().checked_sub(1).and_then(Lane::from_index),
            Direction::Right => Lane::from_index(self.index() + 1),
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Player {
    pub lane: Lane,
}

impl Player {
    /// Shift one lane; returns false when already at the edge
    pub fn shift(&mut self, direction: Direction) -> bool {
        match self.lane.step(direction) {
            Some(lane) => {
                self.lane = lane;
                true
            }
            None => false,
        }
    }
}

/// Run bookkeeping
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Obstacles that left the screen without hitting the player
    pub score: u32,
    /// Ticks advanced this run
    pub frame_count: u64,
    /// Profile locked in at start
    pub active_difficulty: DifficultyProfile,
    /// Score at the moment of impact, set on GameOver
    pub final_score: Option<u32>,
}

impl GameState {
    pub fn new(active_difficulty: DifficultyProfile) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            score: 0,
            frame_count: 0,
            active_difficulty,
            final_score: None,
        }
    }
}
