//! Main entry point for the backend server.
//!
//! Configures application state and launches the HTTP server with the scene
//! endpoint and the play WebSocket.

use actix_web::{web, App, HttpServer};
use log::info;

use patto_run::config::server::{BIND_HOST, BIND_PORT};
use patto_run::server::{router, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(AppState::new());

    info!("[Server] Listening on {}:{}", BIND_HOST, BIND_PORT);

    // Start the HTTP server with the scene endpoint and play socket.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(router::config)
    })
    .bind((BIND_HOST, BIND_PORT))?
    .run()
    .await
}
