/// Scene layout handed to the host engine at setup.
///
/// Asset paths, the player sprite sheet, its animations, and the static
/// platforms. The host fetches this once as JSON and registers everything
/// before the first tick.
use serde::{Serialize, Deserialize};

use crate::config::game::{GRAVITY_Y, WORLD_HEIGHT, WORLD_WIDTH};
use crate::game::systems::Item;
use crate::game::types::{Animation, Facing, Pose};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub key: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub key: String,
    pub path: String,
    pub frame_width: u32,
    pub frame_height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub key: String,
    pub frames: Vec<u32>,
    pub frame_rate: u32,
    /// `-1` loops forever, `0` plays once.
    pub repeat: i32,
}

impl AnimationSpec {
    fn looping(key: &str, frames: Vec<u32>) -> Self {
        Self { key: key.to_string(), frames, frame_rate: 10, repeat: -1 }
    }

    fn still(key: &str, frame: u32) -> Self {
        Self { key: key.to_string(), frames: vec![frame], frame_rate: 20, repeat: 0 }
    }

    /// Sprite sheet frames for a controller animation. Idle looks the same from both sides.
    pub fn for_animation(animation: Animation) -> Self {
        let key = animation.key();
        match (animation.pose, animation.facing) {
            (Pose::Walk, Facing::Left) => Self::looping(&key, vec![0, 1]),
            (Pose::Idle, _) => Self::looping(&key, vec![2, 3]),
            (Pose::Walk, Facing::Right) => Self::looping(&key, vec![4, 5]),
            (Pose::Jump, Facing::Right) => Self::still(&key, 6),
            (Pose::Jump, Facing::Left) => Self::still(&key, 7),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpawn {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub bounce: f32,
    pub collide_world_bounds: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub width: f32,
    pub height: f32,
    pub gravity_y: f32,
    pub images: Vec<Asset>,
    pub sprite_sheet: SpriteSheet,
    pub animations: Vec<AnimationSpec>,
    pub platforms: Vec<Platform>,
    pub player: PlayerSpawn,
    pub items: Vec<Item>,
}

impl SceneConfig {
    /// Attach the item row a scene rolled so the host places the same items.
    pub fn with_items(mut self, items: &[Item]) -> Self {
        self.items = items.to_vec();
        self
    }
}

fn image(key: &str) -> Asset {
    Asset { key: key.to_string(), path: format!("assets/{key}.png") }
}

fn platform(x: f32, y: f32) -> Platform {
    Platform { x, y, scale: 1.0 }
}

impl Default for SceneConfig {
    fn default() -> Self {
        let animations = [Pose::Walk, Pose::Idle, Pose::Jump]
            .into_iter()
            .flat_map(|pose| {
                [Facing::Left, Facing::Right]
                    .into_iter()
                    .map(move |facing| AnimationSpec::for_animation(Animation::new(pose, facing)))
            })
            .collect();

        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            gravity_y: GRAVITY_Y,
            images: ["sky", "star", "platform", "bomb"].into_iter().map(image).collect(),
            sprite_sheet: SpriteSheet {
                key: "patto".to_string(),
                path: "assets/patto.png".to_string(),
                frame_width: 260,
                frame_height: 280,
            },
            animations,
            platforms: vec![
                // Ground, scaled up to span the whole width.
                Platform { x: 400.0, y: 568.0, scale: 2.0 },
                platform(600.0, 400.0),
                platform(50.0, 250.0),
                platform(750.0, 220.0),
            ],
            player: PlayerSpawn {
                x: 100.0,
                y: 50.0,
                scale: 0.3,
                bounce: 0.1,
                collide_world_bounds: true,
            },
            items: Vec::new(),
        }
    }
}
