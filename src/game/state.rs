use crate::game::types::Facing;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Playing,
    GameOver,
}

/// Mutable state of one running scene.
///
/// Fields are private: the controller is the only writer, and once the phase
/// reaches `GameOver` nothing changes anymore.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerState {
    last_direction: Facing,
    score: u32,
    phase: Phase,
}

impl ControllerState {
    // Crée un état de départ: face à droite, score nul
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_direction(&self) -> Facing {
        self.last_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub(crate) fn face(&mut self, facing: Facing) {
        self.last_direction = facing;
    }

    pub(crate) fn add_score(&mut self, points: u32) -> u32 {
        self.score = self.score.saturating_add(points);
        self.score
    }

    pub(crate) fn end(&mut self) {
        self.phase = Phase::GameOver;
    }
}
