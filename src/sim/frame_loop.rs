//! Self-rescheduling frame chain
//!
//! The host (browser `requestAnimationFrame`, or a headless driver) calls
//! `on_frame` once per display frame. At most one frame request is ever
//! outstanding, so pause/resume or repeated starts can't fork a second chain.

use super::session::{Command, GameSession};
use super::state::GamePhase;
use super::tick::{TickOutcome, tick};
use crate::error::GameError;

/// Something that can call us back on the next frame
pub trait FrameHost {
    /// Schedule exactly one future `GameLoop::on_frame` call
    fn request_frame(&mut self);
}

pub struct GameLoop<H: FrameHost> {
    session: GameSession,
    host: H,
    frame_pending: bool,
}

impl<H: FrameHost> GameLoop<H> {
    pub fn new(session: GameSession, host: H) -> Self {
        let mut game_loop = Self {
            session,
            host,
            frame_pending: false,
        };
        game_loop.arm();
        game_loop
    }

    /// Apply a command, re-arming the chain if it put us in Running
    pub fn dispatch(&mut self, command: Command) -> bool {
        let changed = self.session.apply(command);
        self.arm();
        changed
    }

    /// Start with a difficulty given by name
    pub fn start_with(&mut self, name: &str) -> Result<bool, GameError> {
        let started = self.session.start_with(name)?;
        self.arm();
        Ok(started)
    }

    /// Host callback for a frame we requested
    pub fn on_frame(&mut self) -> TickOutcome {
        self.frame_pending = false;
        let outcome = tick(&mut self.session);
        self.arm();
        outcome
    }

    /// Whether a frame request is outstanding
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn arm(&mut self) {
        if self.session.phase() == GamePhase::Running && !self.frame_pending {
            self.frame_pending = true;
            self.host.request_frame();
        }
    }
}
