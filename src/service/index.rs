//! `GET /` handler.

use axum::extract::State;
use std::sync::Arc;
use std::time::Duration;

use crate::server::ServerState;

/// Simulated work performed by every index request.
pub const INDEX_DELAY: Duration = Duration::from_millis(50);

/// Body returned by the index route.
pub const GREETING: &str = "Hello — Observability POC!";

/// Handle GET / - greet after a short simulated delay.
#[tracing::instrument(name = "handle-index", skip_all)]
pub async fn handle_index(State(state): State<Arc<ServerState>>) -> &'static str {
    tracing::info!(path = "/", "handling / request");
    tokio::time::sleep(INDEX_DELAY).await;
    state.metrics.record_request("GET", "/", 200);
    GREETING
}
