//! HTTP and WebSocket routing configuration.
//!
//! Defines the scene layout endpoint and the play socket.

use actix_web::{http::StatusCode, web, HttpResponse};
use log::error;

use crate::game::systems::ItemField;
use crate::server::play::session::ws_play;
use crate::server::state::AppState;
use crate::server::ws_error::{http_error_response, INTERNAL_ERROR};

/// Configure the application's HTTP/WebSocket routes.
///
/// `/scene` serves the static layout with a freshly rolled item row; the play
/// socket sends its own authoritative row on connect.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/scene")
            .route(web::get().to(scene))
    )
    .service(
        web::resource("/ws/play")
            .to(ws_play)
    );
}

async fn scene(data: web::Data<AppState>) -> HttpResponse {
    let items = ItemField::new(&mut rand::rng());
    let config = data.scene.clone().with_items(items.items());
    match serde_json::to_string(&config) {
        Ok(body) => HttpResponse::Ok().content_type("application/json").body(body),
        Err(e) => {
            error!("[Server] Failed to serialize scene config: {}", e);
            http_error_response(INTERNAL_ERROR, "Failed to serialize scene", None, StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_scene_endpoint_serves_layout() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new()))
                .configure(config)
        ).await;

        let req = test::TestRequest::get().uri("/scene").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["width"], 800.0);
        assert_eq!(body["sprite_sheet"]["key"], "patto");
        assert_eq!(body["items"].as_array().unwrap().len(), 12);
    }

    #[actix_web::test]
    async fn test_scene_rejects_post() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new()))
                .configure(config)
        ).await;

        let req = test::TestRequest::post().uri("/scene").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
