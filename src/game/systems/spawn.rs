//! Hazard spawn system.
//!
//! This module decides how many hazards the current score calls for and
//! where a new hazard enters the world.

use rand::Rng;

use crate::config::game::{
    HAZARD_FALL_SPEED, HAZARD_MAX_SPEED_X, HAZARD_SCORE_STEP, HAZARD_SPAWN_Y, WORLD_WIDTH,
};
use crate::game::types::HazardSpawn;

/// Number of hazards due for `score`: `score / HAZARD_SCORE_STEP`, rounded half up.
pub fn compute_hazard_spawn_count(score: u32) -> usize {
    let whole = score / HAZARD_SCORE_STEP;
    let round_up = score % HAZARD_SCORE_STEP >= HAZARD_SCORE_STEP - HAZARD_SCORE_STEP / 2;
    (whole + u32::from(round_up)) as usize
}

/// Hazards still missing given how many were already spawned.
pub fn hazards_due(score: u32, already_spawned: usize) -> usize {
    compute_hazard_spawn_count(score).saturating_sub(already_spawned)
}

/// Place a new hazard on the half of the world the player is not standing in.
pub fn place_hazard<R: Rng + ?Sized>(player_x: f32, rng: &mut R) -> HazardSpawn {
    let half = WORLD_WIDTH / 2.0;
    let x = if player_x < half {
        rng.random_range(half..=WORLD_WIDTH)
    } else {
        rng.random_range(0.0..=half)
    };

    HazardSpawn {
        x,
        y: HAZARD_SPAWN_Y,
        velocity_x: rng.random_range(-HAZARD_MAX_SPEED_X..=HAZARD_MAX_SPEED_X),
        velocity_y: HAZARD_FALL_SPEED,
        bounce: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_count_steps() {
        assert_eq!(compute_hazard_spawn_count(0), 0);
        assert_eq!(compute_hazard_spawn_count(170), 1);
        assert_eq!(compute_hazard_spawn_count(340), 2);
    }

    #[test]
    fn test_spawn_count_rounds_half_up() {
        assert_eq!(compute_hazard_spawn_count(80), 0);
        assert_eq!(compute_hazard_spawn_count(84), 0);
        assert_eq!(compute_hazard_spawn_count(85), 1);
        assert_eq!(compute_hazard_spawn_count(90), 1);
        assert_eq!(compute_hazard_spawn_count(250), 1);
        assert_eq!(compute_hazard_spawn_count(260), 2);
    }

    #[test]
    fn test_spawn_count_at_max_score() {
        assert_eq!(compute_hazard_spawn_count(u32::MAX), 25_264_514);
        assert_eq!(compute_hazard_spawn_count(u32::MAX - 1), 25_264_513);
    }

    #[test]
    fn test_hazards_due_never_negative() {
        assert_eq!(hazards_due(170, 0), 1);
        assert_eq!(hazards_due(170, 1), 0);
        assert_eq!(hazards_due(170, 3), 0);
        assert_eq!(hazards_due(340, 1), 1);
    }

    #[test]
    fn test_hazard_spawns_away_from_player() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let left_side = place_hazard(100.0, &mut rng);
            assert!(left_side.x >= 400.0 && left_side.x <= 800.0);

            let right_side = place_hazard(650.0, &mut rng);
            assert!(right_side.x >= 0.0 && right_side.x <= 400.0);
        }
    }

    #[test]
    fn test_hazard_velocity_bounds() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let hazard = place_hazard(400.0, &mut rng);
            assert!(hazard.velocity_x.abs() <= 200.0);
            assert_eq!(hazard.velocity_y, 20.0);
            assert_eq!(hazard.y, 16.0);
            assert_eq!(hazard.bounce, 1.0);
        }
    }
}
