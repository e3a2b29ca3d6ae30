//! `GET /sleep` handler.

use axum::extract::{Query, State};
use std::sync::Arc;
use std::time::Duration;

use crate::error::ApiError;
use crate::server::ServerState;

/// Sleep duration used when `t` is absent.
pub const DEFAULT_SLEEP_SECS: f64 = 0.2;

/// First value of `t` in the query string; later repeats are ignored.
pub fn first_t(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "t")
        .map(|(_, value)| value.as_str())
}

/// Reply body for a completed sleep. Whole numbers keep one decimal place.
pub fn slept_message(secs: f64) -> String {
    format!("slept {secs:?}s")
}

/// Parse the requested duration, falling back to [`DEFAULT_SLEEP_SECS`].
///
/// Rejects values that are not numbers, negative, or not finite.
pub fn parse_sleep(raw: Option<&str>) -> Result<(f64, Duration), ApiError> {
    let Some(raw) = raw else {
        return Ok((DEFAULT_SLEEP_SECS, Duration::from_secs_f64(DEFAULT_SLEEP_SECS)));
    };

    let invalid = || ApiError::InvalidSleep {
        value: raw.to_string(),
    };
    let secs: f64 = raw.trim().parse().map_err(|_| invalid())?;
    let duration = Duration::try_from_secs_f64(secs).map_err(|_| invalid())?;
    Ok((secs, duration))
}

/// Handle GET /sleep - sleep for `t` seconds.
#[tracing::instrument(name = "handle-sleep", skip_all, fields(t))]
pub async fn handle_sleep(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<String, ApiError> {
    let (secs, duration) = parse_sleep(first_t(&params))?;

    tracing::Span::current().record("t", secs);
    tracing::info!(t = secs, "handling /sleep request");

    tokio::time::sleep(duration).await;
    state.metrics.record_request("GET", "/sleep", 200);
    Ok(slept_message(secs))
}
