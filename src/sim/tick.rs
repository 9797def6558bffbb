//! Per-frame simulation tick
//!
//! One call advances exactly one frame. A tick either applies completely or
//! ends the run; no half-updated state is visible between calls.

use super::collision::first_collision;
use super::session::GameSession;
use super::state::GamePhase;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Idle,
    /// Frame advanced normally
    Advanced {
        /// Id of the obstacle spawned this frame
        spawned: Option<u32>,
        /// Obstacles that left the screen (each worth one point)
        passed: u32,
    },
    /// Player was hit; the run is over
    GameOver { final_score: u32 },
}

/// Advance the session by one frame
pub fn tick(session: &mut GameSession) -> TickOutcome {
    if session.state.phase != GamePhase::Running {
        return TickOutcome::Idle;
    }

    let profile = session.state.active_difficulty;
    let frame = session.state.frame_count;

    let spawned = session.obstacles.spawn_if_due(
        frame,
        profile.spawn_interval_frames,
        session.config.obstacle_size,
        &mut session.rng,
    );

    session
        .starfield
        .tick(profile.star_speed_multiplier, &mut session.rng);

    let passed = session
        .obstacles
        .advance(profile.move_speed, session.config.obstacle_despawn_y());
    session.state.score += passed;

    session.state.frame_count += 1;

    let hit = first_collision(
        &session.player,
        session.obstacles.obstacles(),
        &session.lane_centers,
        session.config.player_bottom_y(),
    );
    if let Some(obstacle) = hit {
        let final_score = session.state.score;
        session.state.phase = GamePhase::GameOver;
        session.state.final_score = Some(final_score);
        log::info!(
            "Hit by obstacle {} at frame {} - final score {}",
            obstacle.id,
            frame,
            final_score
        );
        return TickOutcome::GameOver { final_score };
    }

    TickOutcome::Advanced { spawned, passed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::difficulty::Difficulty;
    use crate::sim::session::Command;
    use crate::sim::state::Lane;

    fn running(difficulty: Difficulty, seed: u64) -> GameSession {
        let mut session = GameSession::new(GameConfig::default(), seed).unwrap();
        session.select_difficulty(difficulty);
        assert!(session.start());
        session
    }

    #[test]
    fn test_tick_idle_unless_running() {
        let mut session = GameSession::new(GameConfig::default(), 1).unwrap();
        let stars_before = session.stars().to_vec();
        assert_eq!(tick(&mut session), TickOutcome::Idle);
        assert_eq!(session.frame_count(), 0);
        assert_eq!(session.stars(), stars_before.as_slice());
    }

    #[test]
    fn test_first_tick_spawns_from_frame_zero() {
        let mut session = running(Difficulty::Easy, 1);
        let outcome = tick(&mut session);
        assert_eq!(
            outcome,
            TickOutcome::Advanced {
                spawned: Some(1),
                passed: 0
            }
        );
        assert_eq!(session.frame_count(), 1);
        // Spawned at -50 and moved once at easy speed
        assert_eq!(session.obstacles()[0].y, -46.0);
    }

    #[test]
    fn test_hard_spawn_cadence() {
        let mut session = running(Difficulty::Hard, 5);
        let mut spawns = Vec::new();
        // 31 ticks covers frames 0..=30; nothing falls far enough to collide
        for _ in 0..=30 {
            let frame = session.frame_count();
            if let TickOutcome::Advanced { spawned: Some(_), .. } = tick(&mut session) {
                spawns.push(frame);
            }
        }
        assert_eq!(spawns, vec![0, 30]);
        assert_eq!(session.obstacles().len(), 2);
    }

    #[test]
    fn test_score_increments_when_obstacle_leaves() {
        let mut session = running(Difficulty::Easy, 3);
        // Skip frame 0's spawn
        session.state.frame_count = 1;
        session.obstacles.push(Lane::Left, 647.0);
        session.obstacles.push(Lane::Right, 100.0);

        let outcome = tick(&mut session);
        assert_eq!(
            outcome,
            TickOutcome::Advanced {
                spawned: None,
                passed: 1
            }
        );
        assert_eq!(session.score(), 1);
        assert_eq!(session.obstacles().len(), 1);
    }

    #[test]
    fn test_collision_ends_run_with_score_at_impact() {
        let mut session = running(Difficulty::Easy, 4);
        session.state.frame_count = 1;
        session.state.score = 12;
        // Center lane, 40px above the player once it moves 4px
        session.obstacles.push(Lane::Center, 456.0);

        let outcome = tick(&mut session);
        assert_eq!(outcome, TickOutcome::GameOver { final_score: 12 });
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(session.final_score(), Some(12));

        // The run is frozen
        let frame = session.frame_count();
        assert_eq!(tick(&mut session), TickOutcome::Idle);
        assert_eq!(session.frame_count(), frame);
        assert!(!session.apply(Command::MoveLeft));
        assert!(!session.apply(Command::TogglePause));
    }

    #[test]
    fn test_dodged_obstacle_does_not_collide() {
        let mut session = running(Difficulty::Easy, 4);
        session.state.frame_count = 1;
        session.obstacles.push(Lane::Center, 456.0);
        session.apply(Command::MoveLeft);
        assert!(matches!(tick(&mut session), TickOutcome::Advanced { .. }));
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut session = running(Difficulty::Medium, 4);
        session.state.frame_count = 1;
        session.obstacles.push(Lane::Center, 480.0);
        assert!(matches!(tick(&mut session), TickOutcome::GameOver { .. }));

        session.apply(Command::Restart);
        assert_eq!(session.phase(), GamePhase::NotStarted);
        assert_eq!(session.score(), 0);
        assert_eq!(session.frame_count(), 0);
        assert!(session.obstacles().is_empty());
        assert_eq!(session.player().lane, Lane::Center);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut session = running(Difficulty::Hard, 8);
        for _ in 0..5 {
            tick(&mut session);
        }
        session.apply(Command::Pause);
        let frame = session.frame_count();
        let obstacles = session.obstacles().to_vec();
        let stars = session.stars().to_vec();

        for _ in 0..10 {
            assert_eq!(tick(&mut session), TickOutcome::Idle);
        }
        assert_eq!(session.frame_count(), frame);
        assert_eq!(session.obstacles(), obstacles.as_slice());
        assert_eq!(session.stars(), stars.as_slice());

        session.apply(Command::Resume);
        tick(&mut session);
        assert_eq!(session.frame_count(), frame + 1);
        assert_eq!(session.obstacles()[0].y, obstacles[0].y + 9.0);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with same seed should produce identical results
        let mut a = running(Difficulty::Hard, 99999);
        let mut b = running(Difficulty::Hard, 99999);
        let inputs = [Command::MoveLeft, Command::MoveRight, Command::MoveRight];

        for frame in 0..200 {
            if frame % 40 == 0 {
                let cmd = inputs[(frame / 40) % inputs.len()];
                a.apply(cmd);
                b.apply(cmd);
            }
            assert_eq!(tick(&mut a), tick(&mut b));
        }
        assert_eq!(a.score(), b.score());
        assert_eq!(a.obstacles(), b.obstacles());
        assert_eq!(a.stars(), b.stars());
    }
}
