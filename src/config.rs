//! Configuration parsing for the Beacon service.
//!
//! Supports:
//! - CLI arguments via clap
//! - Environment variable overrides
//! - Defaults matching the docker-compose demo stack

use clap::Parser;

/// Beacon: a small HTTP service wired to Prometheus and OpenTelemetry.
#[derive(Parser, Debug, Clone)]
#[command(name = "beacon")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "BEACON_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "BEACON_PORT", default_value_t = 5050)]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text
    #[arg(long, env = "BEACON_LOG_JSON")]
    pub log_json: bool,

    /// Service name attached to every exported span
    #[arg(long, env = "OTEL_SERVICE_NAME", default_value = "observability-poc-app")]
    pub service_name: String,

    /// OTLP/gRPC collector endpoint for span export
    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://jaeger:4317"
    )]
    pub otel_endpoint: String,

    /// Disable span export (logging only)
    #[arg(long, env = "BEACON_NO_TRACE_EXPORT")]
    pub no_trace_export: bool,
}

impl Config {
    /// Parse configuration from CLI arguments and environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Collector endpoint, or `None` when export is disabled.
    pub fn trace_endpoint(&self) -> Option<&str> {
        if self.no_trace_export {
            None
        } else {
            Some(&self.otel_endpoint)
        }
    }

    /// Create a configuration for tests: loopback, random port, no export.
    pub fn test_config() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0, // Random port
            log_level: "debug".into(),
            no_trace_export: true,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5050,
            log_level: "info".into(),
            log_json: false,
            service_name: "observability-poc-app".into(),
            otel_endpoint: "http://jaeger:4317".into(),
            no_trace_export: false,
        }
    }
}
