//! Player vs obstacle collision detection
//!
//! Fixed-size proximity box around lane centers. Different lanes never hit
//! because lane spacing is at least `HIT_RANGE_X` (enforced by
//! `GameConfig::validate`), not because lanes are compared directly.

use super::obstacles::Obstacle;
use super::state::Player;
use crate::consts::{HIT_RANGE_X, HIT_RANGE_Y, LANE_COUNT};

/// True if any obstacle is within the hit range of the player
pub fn check_collision(
    player: &Player,
    obstacles: &[Obstacle],
    lane_centers: &[f32; LANE_COUNT],
    player_bottom_y: f32,
) -> bool {
    first_collision(player, obstacles, lane_centers, player_bottom_y).is_some()
}

/// First obstacle within the hit range of the player, in spawn order
pub fn first_collision<'a>(
    player: &Player,
    obstacles: &'a [Obstacle],
    lane_centers: &[f32; LANE_COUNT],
    player_bottom_y: f32,
) -> Option<&'a Obstacle> {
    let player_x = lane_centers[player.lane.index()];
    obstacles.iter().find(|obstacle| {
        let dx = (lane_centers[obstacle.lane.index()] - player_x).abs();
        let dy = (obstacle.y - player_bottom_y).abs();
        dx < HIT_RANGE_X && dy < HIT_RANGE_Y
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane_centers;
    use crate::sim::obstacles::ObstacleField;
    use crate::sim::state::Lane;

    const PLAYER_Y: f32 = 500.0;

    fn player_in(lane: Lane) -> Player {
        Player { lane }
    }

    #[test]
    fn test_same_lane_within_range_hits() {
        let centers = lane_centers(800.0);
        let mut field = ObstacleField::new();
        field.push(Lane::Center, PLAYER_Y - 49.0);
        assert!(check_collision(&player_in(Lane::Center), field.obstacles(), &centers, PLAYER_Y));
    }

    #[test]
    fn test_vertical_threshold_is_exclusive() {
        let centers = lane_centers(800.0);
        let mut field = ObstacleField::new();
        field.push(Lane::Center, PLAYER_Y - 50.0);
        field.push(Lane::Center, PLAYER_Y + 50.0);
        assert!(!check_collision(&player_in(Lane::Center), field.obstacles(), &centers, PLAYER_Y));
    }

    #[test]
    fn test_obstacle_below_player_still_hits() {
        let centers = lane_centers(800.0);
        let mut field = ObstacleField::new();
        field.push(Lane::Right, PLAYER_Y + 30.0);
        assert!(check_collision(&player_in(Lane::Right), field.obstacles(), &centers, PLAYER_Y));
    }

    #[test]
    fn test_adjacent_lane_never_hits() {
        // Narrowest legal screen: lanes exactly 30px apart
        let centers = lane_centers(90.0);
        let mut field = ObstacleField::new();
        field.push(Lane::Left, PLAYER_Y);
        field.push(Lane::Right, PLAYER_Y);
        assert!(!check_collision(&player_in(Lane::Center), field.obstacles(), &centers, PLAYER_Y));
    }

    #[test]
    fn test_first_collision_returns_earliest() {
        let centers = lane_centers(800.0);
        let mut field = ObstacleField::new();
        field.push(Lane::Center, 0.0);
        let first = field.push(Lane::Center, PLAYER_Y - 10.0);
        field.push(Lane::Center, PLAYER_Y + 10.0);
        let hit = first_collision(&player_in(Lane::Center), field.obstacles(), &centers, PLAYER_Y);
        assert_eq!(hit.map(|o| o.id), Some(first));
    }

    #[test]
    fn test_empty_field_never_hits() {
        let centers = lane_centers(800.0);
        assert!(!check_collision(&player_in(Lane::Left), &[], &centers, PLAYER_Y));
    }
}
