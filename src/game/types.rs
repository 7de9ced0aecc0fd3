use serde::{Serialize, Deserialize};

/// Direction the player sprite faces. Defaults to `Right` until a key is pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn as_str(self) -> &'static str {
        match self {
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pose {
    Idle,
    Walk,
    Jump,
}

impl Pose {
    pub fn as_str(self) -> &'static str {
        match self {
            Pose::Idle => "idle",
            Pose::Walk => "walk",
            Pose::Jump => "jump",
        }
    }
}

/// Animation the host should play: a pose seen from one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animation {
    pub pose: Pose,
    pub facing: Facing,
}

impl Animation {
    pub fn new(pose: Pose, facing: Facing) -> Self {
        Self { pose, facing }
    }

    /// Key registered with the host animation manager, e.g. `"walk-left"`.
    pub fn key(self) -> String {
        format!("{}-{}", self.pose.as_str(), self.facing.as_str())
    }
}

/// Arrow-key state read by the host once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub up: bool,
}

/// Velocity and animation changes for the host to apply to the player body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub velocity_x: f32,
    /// Only set on the tick a jump starts.
    pub velocity_y: Option<f32>,
    pub animation: Animation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreUpdate {
    pub score: u32,
}

/// Overlap reported by the host. Indices refer to the host's own item/hazard groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CollisionEvent {
    ItemCollected { item: usize },
    HazardHit { hazard: usize },
}

/// A hazard to add to the host's bouncing group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardSpawn {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub bounce: f32,
}

/// Side effects the scene asks the host engine to perform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "args")]
pub enum HostCommand {
    SetVelocityX(f32),
    SetVelocityY(f32),
    PlayAnimation(String),
    DisableItem(usize),
    RefillItems,
    SpawnHazard(HazardSpawn),
    UpdateScore(u32),
    PausePhysics,
    TintPlayer(u32),
}
