//! Webhook HTTP server
//!
//! Accepts Discord message payloads on `/webhook` (and `/`) and forwards
//! them through a [`MessageSink`].

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use tgbridge_core::prelude::*;
use tokio::net::TcpListener;

use crate::discord::parse_payload;
use crate::error::RelayError;
use crate::format::{format_message, FormatOptions};
use crate::telegram::MessageSink;

/// Shared state for the webhook handlers
#[derive(Debug)]
pub struct RelayState<S> {
    /// `None` when Telegram credentials are not configured
    pub sink: Option<S>,
    pub format: FormatOptions,
}

impl<S> RelayState<S> {
    pub fn new(sink: Option<S>, format: FormatOptions) -> Self {
        Self { sink, format }
    }
}

/// Build the relay router
pub fn router<S>(state: RelayState<S>) -> Router
where
    S: MessageSink + Sync + 'static,
{
    Router::new()
        .route("/", any(handle_webhook::<S>))
        .route("/webhook", any(handle_webhook::<S>))
        .route("/health", get(health))
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve until Ctrl+C
pub async fn serve<S>(addr: SocketAddr, state: RelayState<S>) -> Result<()>
where
    S: MessageSink + Sync + 'static,
{
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::bind(addr.to_string(), e.to_string()))?;
    let local = listener.local_addr()?;
    info!("Relay listening on http://{}/webhook", local);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::server(e.to_string()))?;

    info!("Relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

async fn handle_webhook<S>(
    State(state): State<Arc<RelayState<S>>>,
    method: Method,
    body: Bytes,
) -> std::result::Result<Response, RelayError>
where
    S: MessageSink + Sync + 'static,
{
    match method {
        Method::OPTIONS => return Ok(preflight()),
        Method::POST => {}
        other => {
            debug!("Rejected {} request", other);
            return Err(RelayError::MethodNotAllowed);
        }
    }

    let sink = state.sink.as_ref().ok_or(RelayError::CredentialsMissing)?;
    let message = parse_payload(&body)?;

    if message.is_empty() {
        debug!("Skipping empty message from {}", message.username());
        return Ok(json_ok(serde_json::json!({ "message": "Empty message, skipped" })));
    }

    let text = format_message(&message, &state.format);
    sink.deliver(&text).await?;

    info!("Forwarded message from {} to Telegram", message.username());
    Ok(json_ok(
        serde_json::json!({ "message": "Message forwarded to Telegram successfully" }),
    ))
}

async fn health() -> Response {
    json_ok(serde_json::json!({ "status": "ok" }))
}

/// CORS preflight answer
fn preflight() -> Response {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
        .into_response()
}

fn json_ok(body: serde_json::Value) -> Response {
    (
        StatusCode::OK,
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(body),
    )
        .into_response()
}
