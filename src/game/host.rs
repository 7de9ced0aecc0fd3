//! Host engine capabilities.
//!
//! The scene never touches physics or rendering itself: it reads input and
//! ground contact through `Host` and pushes `HostCommand`s back.

use crate::game::types::{HostCommand, InputSnapshot};

/// Narrow view of the engine that drives a scene.
pub trait Host {
    /// Arrow-key state for the current tick.
    fn input(&self) -> InputSnapshot;

    /// Whether the player body rests on something below it.
    fn touching_ground(&self) -> bool;

    /// Player x position, used to place hazards.
    fn player_x(&self) -> f32;

    fn apply(&mut self, command: HostCommand);
}

/// One scripted tick: the keys held and whether the player is grounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedFrame {
    pub input: InputSnapshot,
    pub touching_ground: bool,
    pub player_x: f32,
}

/// Replays a fixed input script and records what the scene asked for.
/// Used by the standalone demo and tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHost {
    frames: Vec<ScriptedFrame>,
    cursor: usize,
    pub applied: Vec<HostCommand>,
}

impl ScriptedHost {
    pub fn new(frames: Vec<ScriptedFrame>) -> Self {
        Self { frames, cursor: 0, applied: Vec::new() }
    }

    fn current(&self) -> ScriptedFrame {
        self.frames.get(self.cursor).copied().unwrap_or_default()
    }

    /// Move to the next scripted frame. Returns false once the script is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.frames.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Commands recorded since the last drain.
    pub fn drain(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.applied)
    }
}

impl Host for ScriptedHost {
    fn input(&self) -> InputSnapshot {
        self.current().input
    }

    fn touching_ground(&self) -> bool {
        self.current().touching_ground
    }

    fn player_x(&self) -> f32 {
        self.current().player_x
    }

    fn apply(&mut self, command: HostCommand) {
        self.applied.push(command);
    }
}
