//! HTTP server setup and lifecycle.
//!
//! Configures the axum server with:
//! - Index, sleep and metrics routes
//! - Per-request HTTP spans via tower-http
//! - Graceful shutdown support

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::observability::metrics::HttpMetrics;
use crate::service::{handle_index, handle_metrics, handle_sleep};

/// Server state shared across handlers.
#[derive(Debug)]
pub struct ServerState {
    pub metrics: HttpMetrics,
}

impl ServerState {
    /// Create state with a fresh metrics registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Ok(Self {
            metrics: HttpMetrics::new()?,
        })
    }
}

/// Create the HTTP router.
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/sleep", get(handle_sleep))
        .route("/metrics", get(handle_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener described by `config`.
pub async fn bind(config: &Config) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    Ok(listener)
}

/// Serve requests on an already bound listener until shutdown is signalled.
pub async fn serve(
    listener: TcpListener,
    state: Arc<ServerState>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let app = create_router(state);
    tracing::info!(address = %listener.local_addr()?, "Starting Beacon HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            // Wait for shutdown signal
            let _ = shutdown_rx.changed().await;
            tracing::info!("Shutdown signal received, stopping server");
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Run the Beacon HTTP server.
///
/// # Arguments
///
/// * `config` - Server configuration
/// * `shutdown_rx` - Receiver for shutdown signal
///
/// # Returns
///
/// Returns when the server has shut down.
pub async fn run_server(config: Config, shutdown_rx: watch::Receiver<bool>) -> anyhow::Result<()> {
    let state = Arc::new(ServerState::new()?);
    let listener = bind(&config).await?;
    serve(listener, state, shutdown_rx).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let state = Arc::new(ServerState::new().expect("state"));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bind_rejects_bad_host() {
        let config = Config {
            host: "not a host".into(),
            ..Config::test_config()
        };
        assert!(bind(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_bind_random_port() {
        let listener = bind(&Config::test_config()).await.expect("bind");
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
