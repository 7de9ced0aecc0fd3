// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the scene layout served to every host and a count of open play
//! sessions. Shared between HTTP/WebSocket handlers.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::scene::SceneConfig;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Layout every new scene starts from.
    pub scene: SceneConfig,
    /// Number of play sockets currently open.
    active_sessions: AtomicUsize,
}

impl AppState {
    /// Create a new AppState with the default scene layout.
    pub fn new() -> Self {
        Self::with_scene(SceneConfig::default())
    }

    pub fn with_scene(scene: SceneConfig) -> Self {
        AppState {
            scene,
            active_sessions: AtomicUsize::new(0),
        }
    }

    /// Returns the number of active sessions including the new one.
    pub fn register_session(&self) -> usize {
        self.active_sessions.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Returns the number of sessions left open.
    pub fn unregister_session(&self) -> usize {
        self.active_sessions
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| Some(n.saturating_sub(1)))
            .map_or(0, |previous| previous.saturating_sub(1))
    }

    pub fn active_sessions(&self) -> usize {
        self.active_sessions.load(Ordering::Relaxed)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
