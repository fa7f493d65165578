//! Subcommands of `econia-params`.
//!
//! Every command returns its output lines; `main` prints them. Market
//! reports are JSON lines so they can be piped into other tools.

use crate::config::MarketsConfig;
use crate::error::AppResult;
use clap::Subcommand;
use econia_core::{get_lot_size, get_min_quote_per_base, get_min_size, get_tick_size, MarketParams};
use serde::Serialize;
use tracing::info;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Lot size in base subunits
    LotSize {
        /// Smallest base amount per lot (e.g. 0.001)
        #[arg(long)]
        unit: f64,
        /// Base coin decimals
        #[arg(long)]
        decimals: u8,
    },
    /// Tick size in quote subunits
    TickSize {
        /// Smallest quote amount per tick (e.g. 0.001)
        #[arg(long)]
        unit: f64,
        /// Quote coin decimals
        #[arg(long)]
        decimals: u8,
    },
    /// Minimum order size in lots
    MinSize {
        /// Smallest order in whole base units
        #[arg(long)]
        size: f64,
        /// Base coin decimals
        #[arg(long)]
        decimals: u8,
        /// Base subunits per lot
        #[arg(long)]
        lot_size: u64,
    },
    /// Minimum quote-per-base price increment
    PriceGranularity {
        /// Smallest base amount per lot
        #[arg(long)]
        base_unit: f64,
        /// Smallest quote amount per tick
        #[arg(long)]
        quote_unit: f64,
    },
    /// Derive parameters for every market in a config file
    Market {
        /// Config path (can also be set via ECONIA_MARKETS env var)
        #[arg(short, long)]
        config: Option<String>,
    },
}

/// One line of `market` output.
#[derive(Debug, Serialize)]
struct MarketReport<'a> {
    name: &'a str,
    #[serde(flatten)]
    params: MarketParams,
}

/// Run a command and return its output lines.
pub fn run(command: &Command) -> AppResult<Vec<String>> {
    let lines = match command {
        Command::LotSize { unit, decimals } => {
            vec![get_lot_size(*unit, *decimals)?.to_string()]
        }
        Command::TickSize { unit, decimals } => {
            vec![get_tick_size(*unit, *decimals)?.to_string()]
        }
        Command::MinSize {
            size,
            decimals,
            lot_size,
        } => vec![get_min_size(*size, *decimals, *lot_size)?.to_string()],
        Command::PriceGranularity {
            base_unit,
            quote_unit,
        } => vec![get_min_quote_per_base(*base_unit, *quote_unit)?.to_string()],
        Command::Market { config } => {
            let path = MarketsConfig::resolve_path(config.as_deref());
            info!(config_path = %path, "Loading market configuration");

            let markets = MarketsConfig::from_file(&path)?;
            let derived = markets.derive_all()?;
            info!(markets = derived.len(), "Derived market parameters");

            derived
                .iter()
                .map(|(name, params)| {
                    serde_json::to_string(&MarketReport {
                        name,
                        params: *params,
                    })
                    .map_err(Into::into)
                })
                .collect::<AppResult<Vec<_>>>()?
        }
    };
    Ok(lines)
}
