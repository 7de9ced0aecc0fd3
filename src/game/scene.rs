//! Scene orchestration.
//!
//! A `Scene` owns the controller, the item row and the injected host. The
//! host calls `update` once per frame and `handle` on every overlap; the scene
//! answers by applying `HostCommand`s.

use log::{debug, info};
use rand::rngs::ThreadRng;

use crate::config::game::GAME_OVER_TINT;
use crate::game::controller::GameLoopController;
use crate::game::host::Host;
use crate::game::state::ControllerState;
use crate::game::systems::{place_hazard, Collect, ItemField};
use crate::game::types::{Animation, CollisionEvent, HostCommand, Pose};

pub struct Scene<H: Host> {
    controller: GameLoopController,
    items: ItemField,
    hazards_spawned: usize,
    host: H,
    rng: ThreadRng,
}

impl<H: Host> Scene<H> {
    pub fn new(host: H) -> Self {
        let mut rng = rand::rng();
        Self {
            controller: GameLoopController::new(),
            items: ItemField::new(&mut rng),
            hazards_spawned: 0,
            host,
            rng,
        }
    }

    pub fn state(&self) -> &ControllerState {
        self.controller.state()
    }

    pub fn items(&self) -> &ItemField {
        &self.items
    }

    pub fn hazards_spawned(&self) -> usize {
        self.hazards_spawned
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Run one tick. Nothing is applied once the game is over.
    pub fn update(&mut self) {
        let input = self.host.input();
        let touching_ground = self.host.touching_ground();

        let Some(directive) = self.controller.on_tick(input, touching_ground) else {
            return;
        };

        self.host.apply(HostCommand::SetVelocityX(directive.velocity_x));
        if let Some(velocity_y) = directive.velocity_y {
            self.host.apply(HostCommand::SetVelocityY(velocity_y));
        }
        self.host.apply(HostCommand::PlayAnimation(directive.animation.key()));
    }

    pub fn handle(&mut self, event: CollisionEvent) {
        if self.controller.state().is_game_over() {
            debug!("[Scene] Ignoring {:?} after game over", event);
            return;
        }

        match event {
            CollisionEvent::ItemCollected { item } => self.collect_item(item),
            CollisionEvent::HazardHit { hazard } => self.hit_hazard(hazard),
        }
    }

    fn collect_item(&mut self, item: usize) {
        let outcome = self.items.collect(item);
        if outcome == Collect::Ignored {
            debug!("[Scene] Item {} already collected or unknown", item);
            return;
        }

        let update = self.controller.on_item_collected();
        self.host.apply(HostCommand::DisableItem(item));
        self.host.apply(HostCommand::UpdateScore(update.score));

        if outcome == Collect::Refilled {
            debug!("[Scene] Item row emptied, refilling");
            self.host.apply(HostCommand::RefillItems);
        }

        let due = self.controller.hazards_due(self.hazards_spawned);
        for _ in 0..due {
            let spawn = place_hazard(self.host.player_x(), &mut self.rng);
            self.host.apply(HostCommand::SpawnHazard(spawn));
            self.hazards_spawned += 1;
        }
        if due > 0 {
            info!("[Scene] Score {} -> {} hazard(s) in play", update.score, self.hazards_spawned);
        }
    }

    fn hit_hazard(&mut self, hazard: usize) {
        self.controller.on_hazard_hit();
        let state = self.controller.state();
        info!("[Scene] Hazard {} hit. Game over with score {}", hazard, state.score());

        let idle = Animation::new(Pose::Idle, state.last_direction());
        self.host.apply(HostCommand::PausePhysics);
        self.host.apply(HostCommand::TintPlayer(GAME_OVER_TINT));
        self.host.apply(HostCommand::PlayAnimation(idle.key()));
    }
}
