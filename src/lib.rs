//! Beacon: a small HTTP service wired to Prometheus and OpenTelemetry.
//!
//! Serves a greeting and a configurable sleep endpoint, counting every
//! handled request and wrapping each in a tracing span that is exported to
//! a collector such as Jaeger.
//!
//! # Modules
//!
//! - [`config`]: CLI and environment configuration
//! - [`error`]: Handler errors and their HTTP status mapping
//! - [`observability`]: Metrics and tracing setup
//! - [`server`]: Router, bind and graceful shutdown
//! - [`service`]: Route handlers

// Lint configuration
#![warn(clippy::all)]
#![allow(
    clippy::module_name_repetitions, // observability::metrics::HttpMetrics is fine
    clippy::must_use_candidate,      // Not all functions need #[must_use]
    clippy::missing_errors_doc,      // Error docs can be verbose
    clippy::missing_panics_doc       // Panic docs can be verbose
)]

pub mod config;
pub mod error;
pub mod observability;
pub mod server;
pub mod service;
