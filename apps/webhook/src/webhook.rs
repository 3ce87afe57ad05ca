//! Webhook dispatcher: the Meta verification handshake and the inbound
//! message route.
//!
//! Inbound handling is ack-first, best-effort: payloads without actionable
//! content are acknowledged with 200 so the platform does not redeliver
//! them, and a generation or delivery fault maps to a single 500 without
//! notifying the original sender. Redelivered duplicates are relayed again;
//! there is no deduplication here.

use crate::gemini::GenAi;
use crate::whatsapp::MessageSender;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use relay_core::{Command, RelayResult, first_message};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub verify_token: Arc<str>,
    pub genai: Arc<dyn GenAi>,
    pub sender: Arc<dyn MessageSender>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", get(verify).post(receive))
        .route("/healthz", get(healthz))
        .with_state(state)
}

#[derive(Deserialize)]
struct VerifyQs {
    #[serde(rename = "hub.mode")]
    mode: Option<String>,
    #[serde(rename = "hub.challenge")]
    challenge: Option<String>,
    #[serde(rename = "hub.verify_token")]
    token: Option<String>,
}

async fn verify(State(state): State<AppState>, Query(q): Query<VerifyQs>) -> impl IntoResponse {
    if q.mode.as_deref() == Some("subscribe") && q.token.as_deref() == Some(&*state.verify_token) {
        tracing::info!("webhook verified");
        (StatusCode::OK, q.challenge.unwrap_or_default())
    } else {
        (StatusCode::FORBIDDEN, String::new())
    }
}

async fn receive(State(state): State<AppState>, Json(payload): Json<Value>) -> StatusCode {
    let Some(message) = first_message(&payload) else {
        return StatusCode::OK;
    };
    let Some(text) = message.text else {
        // Non-text message types are acknowledged without a reply.
        return StatusCode::OK;
    };

    match relay(&state, &message.from, &text).await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::error!(error = %err, from = %message.from, "relay failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Generation runs before the send; the reply payload depends on its output,
/// and a fault at either stage short-circuits the pipeline.
async fn relay(state: &AppState, from: &str, text: &str) -> RelayResult<()> {
    match Command::parse(text) {
        Command::Image { prompt } => {
            let url = state.genai.generate_image(&prompt).await?;
            state.sender.send_image(from, &url).await
        }
        Command::Chat { prompt } => {
            let reply = state.genai.generate_text(&prompt).await?;
            state.sender.send_text(from, &reply).await
        }
    }
}

async fn healthz() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
