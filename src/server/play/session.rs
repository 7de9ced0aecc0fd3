/// WebSocket session handler for a running scene.
///
/// This actor owns one `Scene` for the lifetime of the connection. The browser
/// engine sends a frame per tick and reports overlaps; every message that
/// produced host commands is answered with a `Commands` batch.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, error, info};
use uuid::Uuid;

use super::host::FrameHost;
use super::messages::{ClientWsMessage, ServerWsMessage};
use crate::server::anti_spam::AntiSpamState;
use crate::server::state::AppState;
use crate::server::ws_error::{ws_error_message, FLOODING, INVALID_MESSAGE};
use crate::game::scene::Scene;

pub struct PlaySession {
    pub session_id: Uuid,
    scene: Scene<FrameHost>,
    anti_spam: AntiSpamState,
    app_state: web::Data<AppState>,
}

impl PlaySession {
    pub fn new(app_state: web::Data<AppState>) -> Self {
        let spawn_x = app_state.scene.player.x;
        Self {
            session_id: Uuid::new_v4(),
            scene: Scene::new(FrameHost::new(spawn_x)),
            anti_spam: AntiSpamState::new(),
            app_state,
        }
    }

    /// Apply one client message to the scene. Returns the commands it produced.
    fn process(&mut self, msg: ClientWsMessage) -> Option<ServerWsMessage> {
        match msg {
            ClientWsMessage::Frame { input, touching_ground, player_x } => {
                self.scene.host_mut().set_frame(input, touching_ground, player_x);
                self.scene.update();
            }
            ClientWsMessage::Collision(event) => {
                debug!("[PlaySession] {} reported {:?}", self.session_id, event);
                self.scene.handle(event);
            }
            ClientWsMessage::Ping => return Some(ServerWsMessage::Pong),
        }

        let commands = self.scene.host_mut().take_commands();
        if commands.is_empty() {
            None
        } else {
            Some(ServerWsMessage::commands(commands))
        }
    }

    /// Count one incoming message. Over the per-second limit, returns the error
    /// frame to send before the socket is closed.
    fn check_flood(&mut self) -> Option<String> {
        let session = self.session_id.to_string();
        if !self.anti_spam.record_message(&session) {
            return None;
        }
        Some(ws_error_message(FLOODING, "Too many messages per second.", Some(&session)))
    }

    fn send_error(&mut self, ctx: &mut ws::WebsocketContext<Self>, code: &str, message: &str, context: Option<&str>) {
        let session = self.session_id.to_string();
        if self.anti_spam.should_send_error(code, &session) {
            ctx.text(ws_error_message(code, message, context));
        }
    }
}

impl Actor for PlaySession {
    type Context = ws::WebsocketContext<Self>;

    /// Called when the session starts. Sends the scene layout with this session's item row.
    fn started(&mut self, ctx: &mut Self::Context) {
        let count = self.app_state.register_session();
        info!("[PlaySession] {} started ({} active)", self.session_id, count);

        let config = self.app_state.scene.clone().with_items(self.scene.items().items());
        ctx.notify(ServerWsMessage::setup(config));
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        let count = self.app_state.unregister_session();
        let state = self.scene.state();
        info!(
            "[PlaySession] {} stopped with score {} ({:?}), {} active",
            self.session_id, state.score(), state.phase(), count
        );
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for PlaySession {
    /// Handles incoming WebSocket messages from the host engine.
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                if let Some(text) = self.check_flood() {
                    ctx.text(text);
                    ctx.close(Some(ws::CloseReason {
                        code: ws::CloseCode::Policy,
                        description: Some("Flooding".into()),
                    }));
                    ctx.stop();
                    return;
                }

                match serde_json::from_str::<ClientWsMessage>(&text) {
                    Ok(msg) => {
                        self.anti_spam.reset_on_valid_action();
                        if let Some(reply) = self.process(msg) {
                            ctx.notify(reply);
                        }
                    }
                    Err(e) => {
                        let context = e.to_string();
                        self.send_error(ctx, INVALID_MESSAGE, "Invalid client message", Some(&context));
                    }
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                error!("[PlaySession] {} protocol error: {}", self.session_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<ServerWsMessage> for PlaySession {
    type Result = ();

    /// Serializes a server message and sends it to the browser.
    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                // Serialization error: notify client and close connection.
                error!("[PlaySession] Failed to serialize ServerWsMessage: {}", e);
                ctx.text(r#"{"action":"Error","data":"Internal server error"}"#);
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

/// WebSocket endpoint for a play session. No parameters: each connection is a fresh scene.
pub async fn ws_play(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(PlaySession::new(data), &req, stream)
}
