//! Falling obstacles and their spawner

use rand::Rng;
use serde::Serialize;

use super::state::Lane;

/// An asteroid falling down one lane
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Obstacle {
    pub id: u32,
    pub lane: Lane,
    /// Top edge (pixels, grows downward)
    pub y: f32,
    /// Cosmetic sprite rotation
    pub rotation_deg: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Spawn one obstacle above the screen when `frame_count` lands on the
    /// spawn interval. Frame 0 always spawns.
    pub fn spawn_if_due<R: Rng>(
        &mut self,
        frame_count: u64,
        spawn_interval_frames: u32,
        obstacle_size: f32,
        rng: &mut R,
    ) -> Option<u32> {
        let interval = u64::from(spawn_interval_frames.max(1));
        if frame_count % interval != 0 {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        let lane = Lane::ALL[rng.random_range(0..Lane::ALL.len())];
        self.obstacles.push(Obstacle {
            id,
            lane,
            y: -obstacle_size,
            rotation_deg: rng.random_range(0.0..360.0),
        });
        log::debug!("frame {frame_count}: spawned obstacle {id} in {lane:?}");
        Some(id)
    }

    /// Move every obstacle down and drop the ones past `despawn_below`.
    /// Returns how many left the screen.
    pub fn advance(&mut self, move_speed: f32, despawn_below: f32) -> u32 {
        let mut passed = 0;
        self.obstacles.retain_mut(|obstacle| {
            obstacle.y += move_speed;
            if obstacle.y > despawn_below {
                log::trace!("obstacle {} passed", obstacle.id);
                passed += 1;
                false
            } else {
                true
            }
        });
        passed
    }

    /// Drop all obstacles and restart id allocation
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, lane: Lane, y: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            lane,
            y,
            rotation_deg: 0.0,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_frame_zero_spawns_above_screen() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut field = ObstacleField::new();
        let id = field.spawn_if_due(0, 70, 50.0, &mut rng);
        assert_eq!(id, Some(1));
        assert_eq!(field.obstacles()[0].y, -50.0);
        assert!(field.spawn_if_due(1, 70, 50.0, &mut rng).is_none());
        assert!(field.spawn_if_due(69, 70, 50.0, &mut rng).is_none());
        assert_eq!(field.spawn_if_due(70, 70, 50.0, &mut rng), Some(2));
    }

    #[test]
    fn test_spawn_uses_every_lane() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut field = ObstacleField::new();
        for frame in 0..300 {
            field.spawn_if_due(frame, 1, 50.0, &mut rng);
        }
        for lane in Lane::ALL {
            assert!(field.obstacles().iter().any(|o| o.lane == lane));
        }
    }

    #[test]
    fn test_advance_removes_and_counts_in_one_pass() {
        let mut field = ObstacleField::new();
        field.push(Lane::Left, 648.0);
        field.push(Lane::Center, 100.0);
        field.push(Lane::Right, 649.0);
        field.push(Lane::Left, 646.0);

        // despawn line at 600 + 50
        let passed = field.advance(3.0, 650.0);
        assert_eq!(passed, 2);
        let ys: Vec<f32> = field.obstacles().iter().map(|o| o.y).collect();
        assert_eq!(ys, vec![103.0, 649.0]);
    }

    #[test]
    fn test_advance_on_exact_line_keeps_obstacle() {
        let mut field = ObstacleField::new();
        field.push(Lane::Center, 646.0);
        assert_eq!(field.advance(4.0, 650.0), 0);
        assert_eq!(field.advance(4.0, 650.0), 1);
        assert!(field.is_empty());
    }

    #[test]
    fn test_clear_resets_ids() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ObstacleField::new();
        field.spawn_if_due(0, 30, 50.0, &mut rng);
        field.spawn_if_due(30, 30, 50.0, &mut rng);
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.spawn_if_due(0, 30, 50.0, &mut rng), Some(1));
    }

    proptest! {
        #[test]
        fn prop_spawn_cadence_counts_frame_zero(interval in 1u32..100, ticks in 1u64..1000) {
            let mut rng = Pcg32::seed_from_u64(0);
            let mut field = ObstacleField::new();
            let mut spawned = 0u64;
            for frame in 0..ticks {
                if field.spawn_if_due(frame, interval, 50.0, &mut rng).is_some() {
                    spawned += 1;
                }
            }
            prop_assert_eq!(spawned, ticks.div_ceil(u64::from(interval)));
        }
    }
}
