//! Request error types and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid sleep duration {value:?}: expected a non-negative number of seconds")]
    InvalidSleep { value: String },

    #[error("failed to encode metrics: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidSleep { .. } => StatusCode::BAD_REQUEST,
            ApiError::Metrics(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Rejected request");
        }
        (status, self.to_string()).into_response()
    }
}
