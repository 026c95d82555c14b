//! Telegram webhook server.
//!
//! `POST /webhook` acknowledges every update immediately and processes it on
//! a detached task with a deadline shorter than Telegram's retry window.
//! Failures are logged and never reported back to Telegram, so a bad update
//! cannot trigger a retry storm. `GET /health` is the liveness probe.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use log::{debug, error, info, warn};
use scales_core::Tracker;
use tokio::{net::TcpListener, time::timeout};

use crate::{
    args::ServeArgs,
    telegram::{TelegramClient, Update},
};

/// Default upper bound for processing one update.
const PROCESSING_TIMEOUT: Duration = Duration::from_secs(50);

#[derive(Clone)]
pub struct AppState {
    tracker: Arc<Tracker>,
    telegram: Arc<TelegramClient>,
    processing_timeout: Duration,
}

impl AppState {
    pub fn new(tracker: Tracker, telegram: TelegramClient) -> Self {
        Self {
            tracker: Arc::new(tracker),
            telegram: Arc::new(telegram),
            processing_timeout: PROCESSING_TIMEOUT,
        }
    }

    /// Overrides the deadline after which an update is dropped.
    pub fn with_processing_timeout(mut self, processing_timeout: Duration) -> Self {
        self.processing_timeout = processing_timeout;
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhook", post(webhook))
        .with_state(state)
}

/// Registers the webhook if configured and serves until Ctrl-C.
pub async fn serve(tracker: Tracker, args: ServeArgs) -> Result<()> {
    let telegram = TelegramClient::new(&args.api_base, &args.token)?;

    if let Some(url) = args.webhook_url.as_deref() {
        telegram
            .set_webhook(url)
            .await
            .context("Failed to register webhook")?;
        info!("Registered webhook at {url}");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Webhook server listening on http://{addr}");

    let state = AppState::new(tracker, telegram)
        .with_processing_timeout(Duration::from_secs(args.processing_timeout));

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated with error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutting down");
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn webhook(State(state): State<AppState>, body: Bytes) -> &'static str {
    match serde_json::from_slice::<Update>(&body) {
        Ok(update) => {
            tokio::spawn(process_update(state, update));
        }
        Err(e) => warn!("Ignoring malformed update: {e}"),
    }
    "ok"
}

async fn process_update(state: AppState, update: Update) {
    let update_id = update.update_id;
    let deadline = state.processing_timeout;

    match timeout(deadline, handle_update(&state, update)).await {
        Ok(Ok(())) => debug!("Processed update {update_id}"),
        Ok(Err(e)) => error!("Failed to process update {update_id}: {e:#}"),
        Err(_) => warn!(
            "Update {update_id} timed out after {}ms and was dropped",
            deadline.as_millis()
        ),
    }
}

async fn handle_update(state: &AppState, update: Update) -> Result<()> {
    let Some(message) = update.message else {
        return Ok(());
    };
    let Some(text) = message.text.as_deref() else {
        return Ok(());
    };

    let reply = state
        .tracker
        .handle_message(message.user_id(), text)
        .await
        .context("Tracker failed")?;

    if let Some(reply) = reply {
        state
            .telegram
            .send_message(message.chat.id, &reply)
            .await?;
    }
    Ok(())
}
