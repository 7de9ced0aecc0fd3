#[cfg(test)]
mod tests {
    use crate::game::systems::compute_hazard_spawn_count;
    use crate::game::{GameLoopController, Scene, ScriptedFrame, ScriptedHost};
    use crate::game::types::{CollisionEvent, Facing, HostCommand, InputSnapshot};

    const NONE: InputSnapshot = InputSnapshot { left: false, right: false, up: false };
    const LEFT: InputSnapshot = InputSnapshot { left: true, right: false, up: false };

    #[test]
    fn test_score_reaches_first_hazard_step() {
        let mut controller = GameLoopController::new();
        assert_eq!(controller.state().score(), 0);

        assert_eq!(controller.on_item_collected().score, 10);
        for _ in 0..16 {
            controller.on_item_collected();
        }

        assert_eq!(controller.state().score(), 170);
        assert_eq!(compute_hazard_spawn_count(170), 1);
    }

    #[test]
    fn test_idle_on_ground_after_left() {
        let mut controller = GameLoopController::new();
        controller.on_tick(LEFT, true);
        assert_eq!(controller.state().last_direction(), Facing::Left);

        let directive = controller.on_tick(NONE, true).unwrap();
        assert_eq!(directive.animation.key(), "idle-left");
        assert_eq!(directive.velocity_x, 0.0);
    }

    #[test]
    fn test_score_is_ten_per_item_until_game_over() {
        let mut controller = GameLoopController::new();
        for n in 1..=30u32 {
            assert_eq!(controller.on_item_collected().score, 10 * n);
        }
        controller.on_hazard_hit();
        for _ in 0..5 {
            assert_eq!(controller.on_item_collected().score, 300);
        }
    }

    #[test]
    fn test_scene_spawns_one_hazard_per_step() {
        let frame = ScriptedFrame { input: NONE, touching_ground: true, player_x: 700.0 };
        let mut scene = Scene::new(ScriptedHost::new(vec![frame]));

        // 34 collects across refills: score 340.
        for n in 0..34 {
            scene.handle(CollisionEvent::ItemCollected { item: n % 12 });
        }
        assert_eq!(scene.state().score(), 340);
        assert_eq!(scene.hazards_spawned(), 2);

        let spawns: Vec<_> = scene
            .host_mut()
            .drain()
            .into_iter()
            .filter_map(|c| match c {
                HostCommand::SpawnHazard(spawn) => Some(spawn),
                _ => None,
            })
            .collect();
        assert_eq!(spawns.len(), 2);
        // Player on the right half: hazards come in from the left.
        assert!(spawns.iter().all(|s| s.x <= 400.0));
    }
}
