//! Demo output (terminal).
//!
//! This module prints the controller state and the commands a tick produced.

use crate::game::state::ControllerState;
use crate::game::types::HostCommand;

/// Print the commands applied during one tick.
pub fn print_commands(tick: usize, commands: &[HostCommand]) {
    if commands.is_empty() {
        println!("[{:>3}] (no commands)", tick);
        return;
    }
    let line = commands.iter().map(describe).collect::<Vec<_>>().join(", ");
    println!("[{:>3}] {}", tick, line);
}

/// Print the state of the controller.
pub fn print_state(state: &ControllerState) {
    println!("--- Controller ---");
    println!("Facing: {}", state.last_direction().as_str());
    println!("Score: {}", state.score());
    println!("Phase: {:?}", state.phase());
    println!();
}

fn describe(command: &HostCommand) -> String {
    match command {
        HostCommand::SetVelocityX(vx) => format!("vx={vx}"),
        HostCommand::SetVelocityY(vy) => format!("vy={vy}"),
        HostCommand::PlayAnimation(key) => format!("anim={key}"),
        HostCommand::DisableItem(i) => format!("item#{i} off"),
        HostCommand::RefillItems => "items refilled".to_string(),
        HostCommand::SpawnHazard(h) => format!("hazard at x={:.0} vx={:.0}", h.x, h.velocity_x),
        HostCommand::UpdateScore(score) => format!("score={score}"),
        HostCommand::PausePhysics => "physics paused".to_string(),
        HostCommand::TintPlayer(rgb) => format!("tint=#{rgb:06x}"),
    }
}
