//! Command-line derivation of Econia market parameters.
//!
//! Wraps the granularity calculator for market designers:
//! - one-off lot, tick, min size, and price granularity conversions
//! - batch derivation for every market in a TOML file

pub mod commands;
pub mod config;
pub mod error;

pub use commands::{run, Command};
pub use config::{MarketConfig, MarketsConfig};
pub use error::{AppError, AppResult};
