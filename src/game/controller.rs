//! Per-tick player control.
//!
//! The controller turns the host's input snapshot into a velocity/animation
//! directive, keeps the score, and freezes for good once a hazard is hit.

use crate::config::game::{ITEM_REWARD, JUMP_VELOCITY, RUN_SPEED};
use crate::game::state::ControllerState;
use crate::game::systems::hazards_due;
use crate::game::types::{Animation, Directive, Facing, InputSnapshot, Pose, ScoreUpdate};

#[derive(Debug, Clone, Default)]
pub struct GameLoopController {
    state: ControllerState,
}

impl GameLoopController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Compute this tick's directive. Returns `None` once the game is over.
    pub fn on_tick(&mut self, input: InputSnapshot, touching_ground: bool) -> Option<Directive> {
        if self.state.is_game_over() {
            return None;
        }

        // Left wins when both directions are held.
        let (velocity_x, pose) = if input.left {
            self.state.face(Facing::Left);
            (-RUN_SPEED, Pose::Walk)
        } else if input.right {
            self.state.face(Facing::Right);
            (RUN_SPEED, Pose::Walk)
        } else {
            (0.0, Pose::Idle)
        };

        let velocity_y = (input.up && touching_ground).then_some(JUMP_VELOCITY);
        let pose = if touching_ground { pose } else { Pose::Jump };

        Some(Directive {
            velocity_x,
            velocity_y,
            animation: Animation::new(pose, self.state.last_direction()),
        })
    }

    /// Award the item reward. After game over the frozen score is returned as is.
    pub fn on_item_collected(&mut self) -> ScoreUpdate {
        if self.state.is_game_over() {
            return ScoreUpdate { score: self.state.score() };
        }
        ScoreUpdate { score: self.state.add_score(ITEM_REWARD) }
    }

    pub fn on_hazard_hit(&mut self) {
        self.state.end();
    }

    /// Hazards still to spawn for the current score, given how many are already in play.
    pub fn hazards_due(&self, already_spawned: usize) -> usize {
        hazards_due(self.state.score(), already_spawned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Phase;

    const IDLE: InputSnapshot = InputSnapshot { left: false, right: false, up: false };
    const LEFT: InputSnapshot = InputSnapshot { left: true, right: false, up: false };
    const RIGHT: InputSnapshot = InputSnapshot { left: false, right: true, up: false };
    const UP: InputSnapshot = InputSnapshot { left: false, right: false, up: true };

    #[test]
    fn test_holding_left_keeps_facing_left() {
        let mut controller = GameLoopController::new();
        for _ in 0..5 {
            let directive = controller.on_tick(LEFT, true).unwrap();
            assert_eq!(directive.velocity_x, -160.0);
            assert_eq!(directive.animation.key(), "walk-left");
            assert_eq!(controller.state().last_direction(), Facing::Left);
        }
    }

    #[test]
    fn test_right_walks_right() {
        let mut controller = GameLoopController::new();
        let directive = controller.on_tick(RIGHT, true).unwrap();
        assert_eq!(directive.velocity_x, 160.0);
        assert_eq!(directive.velocity_y, None);
        assert_eq!(directive.animation.key(), "walk-right");
    }

    #[test]
    fn test_left_takes_priority_over_right() {
        let mut controller = GameLoopController::new();
        let both = InputSnapshot { left: true, right: true, up: false };
        let directive = controller.on_tick(both, true).unwrap();
        assert_eq!(directive.velocity_x, -160.0);
        assert_eq!(controller.state().last_direction(), Facing::Left);
    }

    #[test]
    fn test_idle_uses_last_direction() {
        let mut controller = GameLoopController::new();
        controller.on_tick(LEFT, true);
        let directive = controller.on_tick(IDLE, true).unwrap();
        assert_eq!(directive.velocity_x, 0.0);
        assert_eq!(directive.animation.key(), "idle-left");
    }

    #[test]
    fn test_idle_defaults_to_right() {
        let mut controller = GameLoopController::new();
        let directive = controller.on_tick(IDLE, true).unwrap();
        assert_eq!(directive.animation.key(), "idle-right");
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut controller = GameLoopController::new();
        let grounded = controller.on_tick(UP, true).unwrap();
        assert_eq!(grounded.velocity_y, Some(-330.0));

        let airborne = controller.on_tick(UP, false).unwrap();
        assert_eq!(airborne.velocity_y, None);
    }

    #[test]
    fn test_airborne_overrides_animation_with_jump() {
        let mut controller = GameLoopController::new();
        let directive = controller.on_tick(LEFT, false).unwrap();
        assert_eq!(directive.velocity_x, -160.0);
        assert_eq!(directive.animation.key(), "jump-left");

        let directive = controller.on_tick(IDLE, false).unwrap();
        assert_eq!(directive.animation.key(), "jump-left");
    }

    #[test]
    fn test_item_collected_adds_reward() {
        let mut controller = GameLoopController::new();
        for n in 1..=7 {
            let update = controller.on_item_collected();
            assert_eq!(update.score, 10 * n);
        }
        assert_eq!(controller.state().score(), 70);
    }

    #[test]
    fn test_hazard_hit_freezes_state() {
        let mut controller = GameLoopController::new();
        controller.on_tick(LEFT, true);
        controller.on_item_collected();
        controller.on_hazard_hit();
        let frozen = controller.state().clone();
        assert_eq!(frozen.phase(), Phase::GameOver);

        assert!(controller.on_tick(RIGHT, true).is_none());
        assert_eq!(controller.on_item_collected().score, 10);
        controller.on_hazard_hit();
        assert_eq!(controller.state(), &frozen);
    }

    #[test]
    fn test_hazard_count_follows_score() {
        let mut controller = GameLoopController::new();
        assert_eq!(controller.hazards_due(0), 0);
        for _ in 0..17 {
            controller.on_item_collected();
        }
        assert_eq!(controller.hazards_due(0), 1);
        assert_eq!(controller.hazards_due(1), 0);
    }
}
