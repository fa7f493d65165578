//! Market configuration file.
//!
//! ```toml
//! [[markets]]
//! name = "APT-USDC"
//! base_decimals = 8
//! quote_decimals = 6
//! base_unit = 0.001
//! quote_unit = 0.001
//! min_order_size = 0.01
//! ```

use crate::error::{AppError, AppResult};
use econia_core::{MarketGranularity, MarketParams};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the default config path.
pub const CONFIG_ENV_VAR: &str = "ECONIA_MARKETS";

/// Config path used when neither CLI nor environment provide one.
pub const DEFAULT_CONFIG_PATH: &str = "config/markets.toml";

/// One market to derive parameters for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Display name (e.g., "APT-USDC").
    pub name: String,
    #[serde(flatten)]
    pub granularity: MarketGranularity,
}

/// All markets in a config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketsConfig {
    #[serde(default)]
    pub markets: Vec<MarketConfig>,
}

impl MarketsConfig {
    /// Resolve the config path: CLI arg > `ECONIA_MARKETS` > default.
    pub fn resolve_path(cli_path: Option<&str>) -> String {
        cli_path
            .map(str::to_string)
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Load from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parse from TOML text.
    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Check names are present and unique.
    pub fn validate(&self) -> AppResult<()> {
        if self.markets.is_empty() {
            return Err(AppError::Config("No markets configured".to_string()));
        }
        let mut seen = std::collections::HashSet::new();
        for market in &self.markets {
            if market.name.trim().is_empty() {
                return Err(AppError::Config("Market name must not be empty".to_string()));
            }
            if !seen.insert(market.name.as_str()) {
                return Err(AppError::Config(format!(
                    "Duplicate market name: {}",
                    market.name
                )));
            }
        }
        Ok(())
    }

    /// Derive registry parameters for every market, in file order.
    pub fn derive_all(&self) -> AppResult<Vec<(String, MarketParams)>> {
        self.validate()?;
        self.markets
            .iter()
            .map(|market| {
                MarketParams::derive(&market.granularity)
                    .map(|params| (market.name.clone(), params))
                    .map_err(AppError::from)
            })
            .collect()
    }
}
