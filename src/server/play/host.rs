//! Host backed by the frames a browser sends over the play socket.

use crate::game::host::Host;
use crate::game::types::{HostCommand, InputSnapshot};

/// Last frame received from the browser plus the commands queued for it.
#[derive(Debug, Default)]
pub struct FrameHost {
    input: InputSnapshot,
    touching_ground: bool,
    player_x: f32,
    outbox: Vec<HostCommand>,
}

impl FrameHost {
    pub fn new(player_x: f32) -> Self {
        Self { player_x, ..Self::default() }
    }

    /// Record the state reported by the browser for the current tick.
    pub fn set_frame(&mut self, input: InputSnapshot, touching_ground: bool, player_x: f32) {
        self.input = input;
        self.touching_ground = touching_ground;
        self.player_x = player_x;
    }

    pub fn take_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.outbox)
    }
}

impl Host for FrameHost {
    fn input(&self) -> InputSnapshot {
        self.input
    }

    fn touching_ground(&self) -> bool {
        self.touching_ground
    }

    fn player_x(&self) -> f32 {
        self.player_x
    }

    fn apply(&mut self, command: HostCommand) {
        self.outbox.push(command);
    }
}
