//! Structured logging for the Econia SDK tools.
//!
//! JSON logs in production, pretty logs during development, both filtered
//! through `RUST_LOG`.

pub mod error;
pub mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, DEFAULT_FILTER};
