//! Prometheus metrics for the HTTP surface.
//!
//! Key metrics:
//! - http_requests_total: Counter of handled requests by method, endpoint and status

use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// Content type of the Prometheus text exposition format.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Request metrics backed by a dedicated Prometheus registry.
///
/// Created once at startup and shared with handlers through the router
/// state. Each instance owns its own registry, so tests can build fresh
/// ones without colliding.
#[derive(Debug, Clone)]
pub struct HttpMetrics {
    registry: Registry,
    /// Total number of handled requests.
    pub requests_total: IntCounterVec,
}

impl HttpMetrics {
    /// Create the registry and register all collectors.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests"),
            &["method", "endpoint", "http_status"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        Ok(Self {
            registry,
            requests_total,
        })
    }

    /// Count one handled request.
    pub fn record_request(&self, method: &str, endpoint: &str, status: u16) {
        let status = status.to_string();
        self.requests_total
            .with_label_values(&[method, endpoint, status.as_str()])
            .inc();
    }

    /// Current count for a label triple (0 if never recorded).
    pub fn request_count(&self, method: &str, endpoint: &str, status: u16) -> u64 {
        let status = status.to_string();
        self.requests_total
            .get_metric_with_label_values(&[method, endpoint, status.as_str()])
            .map(|c| c.get())
            .unwrap_or(0)
    }

    /// Serialize every registered metric in the text exposition format.
    pub fn render(&self) -> Result<Vec<u8>, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(buffer)
    }
}
