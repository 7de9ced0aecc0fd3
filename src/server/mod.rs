// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the bridge between the browser engine and the scene logic:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Play sessions (one scene per socket)
//! - Error formatting and flood protection

pub mod state;
pub mod router;
pub mod play;
pub mod ws_error;
pub mod anti_spam;
