//! Play bridge: one WebSocket per running browser scene.

pub mod messages;
pub mod host;
pub mod session;
