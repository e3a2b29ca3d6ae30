//! Observability infrastructure.
//!
//! Provides:
//! - Structured logging and OpenTelemetry span export
//! - Prometheus request metrics for the `/metrics` endpoint

pub mod metrics;
pub mod tracing;
