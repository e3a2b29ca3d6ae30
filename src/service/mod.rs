//! HTTP route handlers.
//!
//! - `GET /` - greeting after a fixed simulated delay
//! - `GET /sleep?t=<seconds>` - sleeps for the requested duration
//! - `GET /metrics` - Prometheus scrape endpoint

pub mod index;
pub mod scrape;
pub mod sleep;

pub use index::handle_index;
pub use scrape::handle_metrics;
pub use sleep::handle_sleep;
