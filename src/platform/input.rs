//! Host input events to game commands
//!
//! Keyboard, touch zones and on-screen buttons all funnel into `Command`.
//! Keeping this free of `web_sys` lets it be tested natively.

use crate::error::GameError;
use crate::sim::{Command, Difficulty, GamePhase};

/// Left/right halves of the screen on touch devices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchZone {
    Left,
    Right,
}

/// On-screen buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Button {
    Play,
    Restart,
    Pause,
    /// Difficulty button carrying its `data-difficulty` attribute
    Difficulty(String),
}

/// Map a `KeyboardEvent.key` value
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "p" | "P" => Some(Command::TogglePause),
        "ArrowLeft" => Some(Command::MoveLeft),
        "ArrowRight" => Some(Command::MoveRight),
        _ => None,
    }
}

/// Map a touch on one of the side zones. Touching either side while paused
/// resumes instead of moving.
pub fn command_for_touch(zone: TouchZone, phase: GamePhase) -> Command {
    match (phase, zone) {
        (GamePhase::Paused, _) => Command::Resume,
        (_, TouchZone::Left) => Command::MoveLeft,
        (_, TouchZone::Right) => Command::MoveRight,
    }
}

/// Map a button press; unknown difficulty names are reported, not defaulted
pub fn command_for_button(button: &Button) -> Result<Command, GameError> {
    match button {
        Button::Play => Ok(Command::Start),
        Button::Restart => Ok(Command::Restart),
        Button::Pause => Ok(Command::TogglePause),
        Button::Difficulty(name) => name.parse::<Difficulty>().map(Command::SelectDifficulty),
    }
}
