//! Beacon: a small HTTP service instrumented with metrics and tracing.
//!
//! # Usage
//!
//! ```bash
//! beacon --port 5050 --otel-endpoint http://jaeger:4317 --log-level info
//! ```
//!
//! Environment variables can also be used:
//! - `BEACON_PORT`: Port to listen on
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: Collector endpoint for spans
//! - `RUST_LOG`: Log level (trace, debug, info, warn, error)

use beacon::config::Config;
use beacon::observability::tracing::{init_tracing, TracingGuard};
use beacon::server::run_server;
use tokio::sync::watch;

/// Print startup banner with version and configuration.
fn print_banner(config: &Config, guard: &TracingGuard) {
    let version = env!("CARGO_PKG_VERSION");
    let export = guard.export_label(config);
    eprintln!(
        r#"
  Beacon v{} - Observable HTTP demo

  Configuration:
    Address:    {}:{}
    Service:    {}
    Export:     {}
    Log Level:  {}

  Press Ctrl+C to shutdown gracefully.
"#,
        version, config.host, config.port, config.service_name, export, config.log_level
    );
}

/// Resolve once SIGINT or SIGTERM arrives.
async fn wait_for_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {
                        tracing::info!("Received SIGINT (Ctrl+C), initiating shutdown...");
                    }
                    _ = sigterm.recv() => {
                        tracing::info!("Received SIGTERM, initiating shutdown...");
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                let _ = ctrl_c.await;
                tracing::info!("Received Ctrl+C, initiating shutdown...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
        tracing::info!("Received Ctrl+C, initiating shutdown...");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse configuration from CLI arguments and environment
    let config = Config::parse_args();

    // Initialize logging and span export before serving anything
    let guard = init_tracing(&config);

    print_banner(&config, &guard);

    // Create shutdown signal channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        wait_for_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let result = run_server(config, shutdown_rx).await;

    // Flush queued spans; this blocks on the batch processor.
    tokio::task::spawn_blocking(move || guard.shutdown()).await?;

    result?;
    tracing::info!("Beacon shutdown complete");
    Ok(())
}
