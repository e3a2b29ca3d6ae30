//! `GET /metrics` handler.

use axum::{extract::State, http::header, response::IntoResponse};
use std::sync::Arc;

use crate::error::ApiError;
use crate::observability::metrics::CONTENT_TYPE;
use crate::server::ServerState;

/// Handle GET /metrics - Prometheus metrics endpoint.
#[tracing::instrument(name = "handle-metrics", skip_all)]
pub async fn handle_metrics(
    State(state): State<Arc<ServerState>>,
) -> Result<impl IntoResponse, ApiError> {
    let buffer = state.metrics.render()?;
    Ok(([(header::CONTENT_TYPE, CONTENT_TYPE)], buffer))
}
