use actix::prelude::*;
use serde::{Serialize, Deserialize};

use crate::config::scene::SceneConfig;
use crate::game::types::{CollisionEvent, HostCommand, InputSnapshot};

// Message client -> serveur
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    /// One engine tick: keys held, ground contact, and where the player is.
    Frame {
        #[serde(default)]
        input: InputSnapshot,
        touching_ground: bool,
        player_x: f32,
    },
    Collision(CollisionEvent),
    Ping,
}

// Message serveur -> client
#[derive(Message, Serialize, Deserialize, Clone, Debug)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    /// Sent once on connect, with the item row this session rolled.
    Setup(SceneConfig),
    Commands(Vec<HostCommand>),
    Pong,
}

impl ServerWsMessage {
    pub fn setup(config: SceneConfig) -> Self {
        Self::Setup(config)
    }
    pub fn commands(commands: Vec<HostCommand>) -> Self {
        Self::Commands(commands)
    }
}
