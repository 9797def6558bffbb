//! Game session: the single owner of all mutable game state
//!
//! Every command goes through here. Commands that don't fit the current
//! phase are ignored and report `false`; they are never errors.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::{Difficulty, DifficultyProfile};
use super::obstacles::{Obstacle, ObstacleField};
use super::starfield::{Star, Starfield};
use super::state::{Direction, GamePhase, GameState, Player};
use crate::config::GameConfig;
use crate::consts::LANE_COUNT;
use crate::error::GameError;

/// Discrete input the session understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    TogglePause,
    Pause,
    Resume,
    /// Start a run with the selected difficulty
    Start,
    /// Back to the start screen with a clean slate
    Restart,
    /// Pick the difficulty for the next start
    SelectDifficulty(Difficulty),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) config: GameConfig,
    pub(crate) lane_centers: [f32; LANE_COUNT],
    pub(crate) state: GameState,
    pub(crate) player: Player,
    pub(crate) starfield: Starfield,
    pub(crate) obstacles: ObstacleField,
    pub(crate) rng: Pcg32,
    selected: Difficulty,
    seed: u64,
}

impl GameSession {
    /// Create a session waiting on the start screen
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut starfield = Starfield::initialize(
            config.star_count,
            config.screen_width,
            config.screen_height,
            &mut rng,
        );
        starfield.scatter(&mut rng);

        let selected = config.default_difficulty;
        Ok(Self {
            lane_centers: config.lane_centers(),
            state: GameState::new(selected.profile()),
            player: Player::default(),
            starfield,
            obstacles: ObstacleField::new(),
            rng,
            selected,
            seed,
            config,
        })
    }

    /// Dispatch a command. Returns whether it changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_player(Direction::Left),
            Command::MoveRight => self.move_player(Direction::Right),
            Command::TogglePause => self.toggle_pause(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::Start => self.start(),
            Command::Restart => {
                self.restart();
                true
            }
            Command::SelectDifficulty(difficulty) => self.select_difficulty(difficulty),
        }
    }

    /// Pick the difficulty for the next `start()`. A running game keeps its
    /// locked-in profile.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.selected == difficulty {
            return false;
        }
        self.selected = difficulty;
        log::info!("Difficulty selected: {}", difficulty.as_str());
        true
    }

    /// Select by name, surfacing typos instead of falling back
    pub fn select_difficulty_by_name(&mut self, name: &str) -> Result<Difficulty, GameError> {
        let difficulty = name.parse::<Difficulty>()?;
        self.select_difficulty(difficulty);
        Ok(difficulty)
    }

    /// Lock in the selected difficulty and begin running
    pub fn start(&mut self) -> bool {
        if self.state.phase != GamePhase::NotStarted {
            return false;
        }
        self.state.active_difficulty = self.selected.profile();
        self.state.phase = GamePhase::Running;
        log::info!("Game started on {}", self.state.active_difficulty.label);
        true
    }

    /// Select by name, then start
    pub fn start_with(&mut self, name: &str) -> Result<bool, GameError> {
        self.select_difficulty_by_name(name)?;
        Ok(self.start())
    }

    pub fn pause(&mut self) -> bool {
        if self.state.phase != GamePhase::Running {
            return false;
        }
        self.state.phase = GamePhase::Paused;
        log::info!("Paused at frame {}", self.state.frame_count);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state.phase != GamePhase::Paused {
            return false;
        }
        self.state.phase = GamePhase::Running;
        log::info!("Resumed at frame {}", self.state.frame_count);
        true
    }

    /// Pause button / P key behaviour
    pub fn toggle_pause(&mut self) -> bool {
        match self.state.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            GamePhase::NotStarted | GamePhase::GameOver => false,
        }
    }

    /// Shift the player one lane; ignored unless running or at an edge
    pub fn move_player(&mut self, direction: Direction) -> bool {
        if self.state.phase != GamePhase::Running {
            return false;
        }
        self.player.shift(direction)
    }

    /// Reset player, obstacles, score and frame count and return to the
    /// start screen. Allowed from any phase. Stars keep scrolling from where
    /// they are.
    pub fn restart(&mut self) {
        self.player = Player::default();
        self.obstacles.clear();
        self.state = GameState::new(self.selected.profile());
        log::info!("Game reset");
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn frame_count(&self) -> u64 {
        self.state.frame_count
    }

    pub fn final_score(&self) -> Option<u32> {
        self.state.final_score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.obstacles.obstacles()
    }

    pub fn stars(&self) -> &[Star] {
        self.starfield.stars()
    }

    pub fn active_difficulty(&self) -> &DifficultyProfile {
        &self.state.active_difficulty
    }

    pub fn selected_difficulty(&self) -> Difficulty {
        self.selected
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn lane_centers(&self) -> &[f32; LANE_COUNT] {
        &self.lane_centers
    }

    pub fn player_bottom_y(&self) -> f32 {
        self.config.player_bottom_y()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
