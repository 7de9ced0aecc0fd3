//! Standalone game loop for local testing/demo.
//!
//! Drives a scene with a scripted host: the player runs right, jumps, picks up
//! the item row, turns back, and finally runs into a hazard.

use log::info;

use crate::game::demo::render::{print_commands, print_state};
use crate::game::host::{ScriptedFrame, ScriptedHost};
use crate::game::scene::Scene;
use crate::game::types::{CollisionEvent, InputSnapshot};

const RIGHT: InputSnapshot = InputSnapshot { left: false, right: true, up: false };
const LEFT: InputSnapshot = InputSnapshot { left: true, right: false, up: false };
const JUMP: InputSnapshot = InputSnapshot { left: false, right: false, up: true };
const NONE: InputSnapshot = InputSnapshot { left: false, right: false, up: false };

/// Build the demo script. Each entry is one tick plus an optional overlap raised after it.
pub fn demo_script() -> Vec<(ScriptedFrame, Option<CollisionEvent>)> {
    let mut script = Vec::new();
    let mut x = 100.0;
    let mut push = |input: InputSnapshot, touching_ground: bool, event: Option<CollisionEvent>, x: f32| {
        script.push((ScriptedFrame { input, touching_ground, player_x: x }, event));
    };

    push(NONE, false, None, x); // falling onto the ground
    push(NONE, true, None, x);

    // Run right across the row, one item per tick.
    for item in 0..12 {
        x += 70.0;
        push(RIGHT, true, Some(CollisionEvent::ItemCollected { item }), x);
    }

    push(JUMP, true, None, x);
    push(NONE, false, None, x);
    push(LEFT, false, None, x);
    push(LEFT, true, None, x);

    // Back along the refilled row.
    for item in (7..12).rev() {
        x -= 70.0;
        push(LEFT, true, Some(CollisionEvent::ItemCollected { item }), x);
    }

    push(NONE, true, Some(CollisionEvent::HazardHit { hazard: 0 }), x);
    push(RIGHT, true, None, x);
    script
}

/// Run the scripted scene until the script is exhausted.
pub fn run_game_loop() {
    let script = demo_script();
    let frames = script.iter().map(|(frame, _)| *frame).collect();
    let mut scene = Scene::new(ScriptedHost::new(frames));

    println!("Game start!");
    print_state(scene.state());

    for (tick, (_, event)) in script.iter().enumerate() {
        scene.update();
        if let Some(event) = event {
            scene.handle(*event);
        }
        print_commands(tick, &scene.host_mut().drain());

        if scene.state().is_game_over() {
            info!("[Demo] Game over at tick {}", tick);
        }
        scene.host_mut().advance();
    }

    print_state(scene.state());
    println!("Hazards spawned: {}", scene.hazards_spawned());
}
