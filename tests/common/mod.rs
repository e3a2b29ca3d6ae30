//! Test utilities and server harness for Beacon tests.
//!
//! Provides:
//! - In-process router calls via `tower::ServiceExt::oneshot`
//! - A real server bound to a random loopback port
//! - An HTTP client for the socket-bound server

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use beacon::config::Config;
use beacon::server::{bind, create_router, serve, ServerState};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tower::ServiceExt;

/// Response captured from an in-process call.
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

/// Build a router backed by fresh state.
pub fn test_app() -> (Router, Arc<ServerState>) {
    beacon::observability::tracing::init_test_tracing();
    let state = Arc::new(ServerState::new().expect("failed to create state"));
    (create_router(state.clone()), state)
}

/// Send a GET request through the router without a socket.
pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("router call failed");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).expect("body is not utf-8"),
    }
}

/// A Beacon server listening on a random loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: Arc<ServerState>,
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    /// Bind and start serving in a background task.
    pub async fn start() -> Self {
        beacon::observability::tracing::init_test_tracing();
        let listener = bind(&Config::test_config()).await.expect("failed to bind");
        let addr = listener.local_addr().expect("no local addr");
        let state = Arc::new(ServerState::new().expect("failed to create state"));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(serve(listener, state.clone(), shutdown_rx));

        Self {
            addr,
            state,
            shutdown_tx,
            handle,
        }
    }

    /// Issue a GET against the running server.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::get(format!("http://{}{path}", self.addr))
            .await
            .expect("request failed")
    }

    /// Signal shutdown and wait for the server task to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        self.handle
            .await
            .expect("server task panicked")
            .expect("server returned an error");
    }
}
