/// Main configuration module.
/// 
/// Re-exports submodules for gameplay constants, the scene layout sent to the
/// host engine, the HTTP/WebSocket bridge, and flood protection.
pub mod game;
pub mod scene;
pub mod server;
pub mod anti_spam;
