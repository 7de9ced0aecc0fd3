/// Gameplay configuration constants.
/// 
/// This module defines the tuning values the controller applies every tick
/// and the parameters used when spawning items and hazards.
pub const RUN_SPEED: f32 = 160.0; // Horizontal velocity while a direction is held.

/// Vertical impulse applied when jumping from the ground (negative is up).
pub const JUMP_VELOCITY: f32 = -330.0;

/// Points awarded per collected item.
pub const ITEM_REWARD: u32 = 10;

/// Score step for hazard spawns: `round(score / HAZARD_SCORE_STEP)` hazards are due.
pub const HAZARD_SCORE_STEP: u32 = 170;

/// World dimensions in pixels.
pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;

/// Downward gravity handed to the host physics.
pub const GRAVITY_Y: f32 = 300.0;

/// Number of items in the collectible row.
pub const ITEM_COUNT: usize = 12;

/// X of the first item and spacing between items.
pub const ITEM_START_X: f32 = 12.0;
pub const ITEM_STEP_X: f32 = 70.0;

/// Vertical bounce range rolled per item.
pub const ITEM_BOUNCE_MIN: f32 = 0.4;
pub const ITEM_BOUNCE_MAX: f32 = 0.8;

/// Hazards drop in from this height.
pub const HAZARD_SPAWN_Y: f32 = 16.0;

/// Horizontal speed bound for a fresh hazard, in both directions.
pub const HAZARD_MAX_SPEED_X: f32 = 200.0;

/// Initial downward speed of a fresh hazard.
pub const HAZARD_FALL_SPEED: f32 = 20.0;

/// Tint applied to the player sprite on game over (RGB).
pub const GAME_OVER_TINT: u32 = 0xff0000;
