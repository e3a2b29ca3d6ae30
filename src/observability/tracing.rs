//! Logging and OpenTelemetry tracing setup.
//!
//! Configures:
//! - Console logging (text or JSON) filtered by `RUST_LOG`
//! - An OTLP span exporter with batch processing, bridged from `tracing`

use opentelemetry::trace::{TraceError, TracerProvider as _};
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{self as sdktrace, TracerProvider};
use opentelemetry_sdk::{runtime, Resource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::Config;

/// Keeps the tracer provider alive and flushes it on shutdown.
///
/// Dropping the guard without calling [`TracingGuard::shutdown`] may lose
/// spans still queued in the batch processor.
#[derive(Debug)]
pub struct TracingGuard {
    provider: Option<TracerProvider>,
}

impl TracingGuard {
    /// Whether spans are being exported to a collector.
    pub fn is_exporting(&self) -> bool {
        self.provider.is_some()
    }

    /// Human-readable export target for the startup banner.
    pub fn export_label<'a>(&self, config: &'a Config) -> &'a str {
        match config.trace_endpoint() {
            Some(endpoint) if self.is_exporting() => endpoint,
            Some(_) => "unavailable (exporter failed to start)",
            None => "disabled",
        }
    }

    /// Flush pending spans and stop the exporter.
    ///
    /// Blocks until the batch processor drains; call it off the async
    /// worker threads (e.g. via `spawn_blocking`).
    pub fn shutdown(mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(e) = provider.shutdown() {
                tracing::warn!(error = %e, "Failed to flush span exporter");
            } else {
                tracing::info!("Span exporter flushed");
            }
        }
    }
}

/// Build a tracer provider that batches spans to an OTLP/gRPC endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn build_tracer_provider(
    service_name: &str,
    endpoint: &str,
) -> Result<TracerProvider, TraceError> {
    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(sdktrace::Config::default().with_resource(Resource::new(vec![
            KeyValue::new("service.name", service_name.to_string()),
        ])))
        .install_batch(runtime::Tokio)
}

/// Initialize logging and, when an endpoint is configured, span export.
///
/// This sets up:
/// - Environment-based filter (via RUST_LOG, falling back to `log_level`)
/// - Console logging with structured format
/// - A `tracing-opentelemetry` layer feeding the global tracer provider
///
/// Exporter construction failures are logged and the service continues with
/// logging only.
///
/// # Panics
///
/// Panics if tracing has already been initialized.
pub fn init_tracing(config: &Config) -> TracingGuard {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},beacon=debug", config.log_level)));

    let fmt_layer = if config.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let (provider, export_error) = match config.trace_endpoint() {
        Some(endpoint) => match build_tracer_provider(&config.service_name, endpoint) {
            Ok(provider) => (Some(provider), None),
            Err(e) => (None, Some(e)),
        },
        None => (None, None),
    };

    let otel_layer = provider.as_ref().map(|provider| {
        global::set_tracer_provider(provider.clone());
        let tracer = provider.tracer("beacon");
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .init();

    match (config.trace_endpoint(), &export_error) {
        (Some(endpoint), None) => {
            tracing::info!(service = %config.service_name, endpoint, "Span export configured");
        }
        (Some(endpoint), Some(e)) => {
            tracing::warn!(endpoint, error = %e, "Failed to create span exporter, logging only");
        }
        (None, _) => {
            tracing::info!(service = %config.service_name, "Span export disabled");
        }
    }

    TracingGuard { provider }
}

/// Initialize tracing for tests (only logs errors).
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("error")
        .with_test_writer()
        .try_init();
}
