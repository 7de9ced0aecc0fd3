//! Gameplay logic for the patto platformer.
//!
//! The browser engine owns physics, rendering and input polling. This crate
//! owns what happens on top of it: per-tick movement directives, score,
//! hazard spawns and the game-over freeze, plus the HTTP/WebSocket bridge the
//! engine talks to.

pub mod config;
pub mod game;
pub mod server;

#[cfg(test)]
mod tests;
