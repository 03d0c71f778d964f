//! HTTP surface: liveness text on `/` and, in webhook mode, Telegram updates on `/webhook`.

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use teloxide::types::Update;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

use super::runner::process_update;
use crate::chain::HandlerChain;

pub const HEALTH_TEXT: &str = "Webhook server is running. Bot is active.";

pub const WEBHOOK_PATH: &str = "/webhook";

/// Header Telegram sets to the secret given to `setWebhook`.
pub const SECRET_HEADER: &str = "x-telegram-bot-api-secret-token";

/// Shared state of the webhook route.
#[derive(Clone)]
pub struct WebhookState {
    pub chain: HandlerChain,
    pub secret: Arc<str>,
    pub bot_username: Arc<str>,
}

async fn health() -> &'static str {
    HEALTH_TEXT
}

/// Accepts one update. Processing is spawned so Telegram gets its answer immediately.
async fn handle_webhook(
    State(state): State<WebhookState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let provided = headers.get(SECRET_HEADER).and_then(|v| v.to_str().ok());
    if provided != Some(state.secret.as_ref()) {
        warn!("Rejected webhook call with missing or wrong secret token");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let update: Update = match serde_json::from_slice(&body) {
        Ok(u) => u,
        Err(e) => {
            warn!(error = %e, "Malformed update payload");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    tokio::spawn(async move {
        process_update(&state.chain, &update, &state.bot_username).await;
    });

    Json(serde_json::json!({ "ok": true })).into_response()
}

/// Router with only the liveness route (polling mode).
pub fn health_router() -> Router {
    Router::new().route("/", get(health))
}

/// Liveness route plus the webhook route.
pub fn webhook_router(state: WebhookState) -> Router {
    health_router().merge(
        Router::new()
            .route(WEBHOOK_PATH, post(handle_webhook))
            .with_state(state),
    )
}

#[instrument(skip(app))]
pub async fn serve(addr: SocketAddr, app: Router) -> Result<()> {
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "HTTP server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
