/// Bridge configuration constants.
/// 
/// Address the HTTP/WebSocket server binds to.
pub const BIND_HOST: &str = "127.0.0.1";

/// Port for the `/scene` and `/ws/play` endpoints.
pub const BIND_PORT: u16 = 8080;
