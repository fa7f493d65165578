//! Market registration parameters.
//!
//! A market is registered on-chain with integer lot, tick, and min sizes.
//! `MarketGranularity` holds the decimal requirements a market designer
//! starts from; `MarketParams::derive` turns them into registry values.

use crate::error::{GranularityError, GranularityResult};
use crate::granularity::{get_lot_size, get_min_quote_per_base, get_min_size, get_tick_size};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Decimal granularity requirements for one base/quote pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketGranularity {
    /// Decimals of the base coin (e.g. 8 for APT).
    pub base_decimals: u8,
    /// Decimals of the quote coin (e.g. 6 for USDC).
    pub quote_decimals: u8,
    /// Smallest base amount per lot, in whole base units.
    pub base_unit: f64,
    /// Smallest quote amount per tick, in whole quote units.
    pub quote_unit: f64,
    /// Smallest order, in whole base units. Not the quote coin.
    pub min_order_size: f64,
}

/// Integer parameters accepted by the registry, plus derived price step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParams {
    /// Base subunits per lot.
    pub lot_size: u64,
    /// Quote subunits per tick.
    pub tick_size: u64,
    /// Minimum order size in lots.
    pub min_size: u64,
    /// Minimum quote-per-base price movement.
    pub price_granularity: f64,
}

impl MarketParams {
    /// Derive registry parameters from decimal requirements.
    ///
    /// # Errors
    /// Any `GranularityError` of the underlying formulas, plus `ZeroMinSize`
    /// when `min_order_size` rounds to zero lots (the registry rejects it).
    pub fn derive(granularity: &MarketGranularity) -> GranularityResult<Self> {
        let lot_size = get_lot_size(granularity.base_unit, granularity.base_decimals)?;
        let tick_size = get_tick_size(granularity.quote_unit, granularity.quote_decimals)?;
        let min_size = get_min_size(
            granularity.min_order_size,
            granularity.base_decimals,
            lot_size,
        )?;
        if min_size == 0 {
            return Err(GranularityError::ZeroMinSize(format!(
                "min_order_size {} with lot_size {lot_size}",
                granularity.min_order_size
            )));
        }
        let price_granularity =
            get_min_quote_per_base(granularity.base_unit, granularity.quote_unit)?;

        debug!(
            lot_size,
            tick_size,
            min_size,
            price_granularity,
            "Derived market parameters"
        );

        Ok(Self {
            lot_size,
            tick_size,
            min_size,
            price_granularity,
        })
    }

    /// Smallest order in base subunits (`min_size` lots).
    pub fn min_order_subunits(&self) -> Option<u64> {
        self.min_size.checked_mul(self.lot_size)
    }
}

impl fmt::Display for MarketParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lot_size={} tick_size={} min_size={} price_granularity={}",
            self.lot_size, self.tick_size, self.min_size, self.price_granularity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apt_usdc() -> MarketGranularity {
        MarketGranularity {
            base_decimals: 8,
            quote_decimals: 6,
            base_unit: 0.001,
            quote_unit: 0.001,
            min_order_size: 0.01,
        }
    }

    #[test]
    fn test_derive_apt_usdc() {
        let params = MarketParams::derive(&apt_usdc()).unwrap();
        assert_eq!(params.lot_size, 100_000);
        assert_eq!(params.tick_size, 1_000);
        assert_eq!(params.min_size, 10);
        assert_eq!(params.price_granularity, 1.0);
        assert_eq!(params.min_order_subunits(), Some(1_000_000));
    }

    #[test]
    fn test_derive_rejects_zero_min_size() {
        let mut granularity = apt_usdc();
        granularity.min_order_size = 0.0;

        assert!(matches!(
            MarketParams::derive(&granularity),
            Err(GranularityError::ZeroMinSize(_))
        ));
    }

    #[test]
    fn test_derive_propagates_domain_error() {
        let mut granularity = apt_usdc();
        granularity.base_unit = 0.0;

        assert!(matches!(
            MarketParams::derive(&granularity),
            Err(GranularityError::NonPositiveUnit(_))
        ));
    }

    #[test]
    fn test_display() {
        let params = MarketParams {
            lot_size: 1000,
            tick_size: 10,
            min_size: 5,
            price_granularity: 0.5,
        };
        assert_eq!(
            params.to_string(),
            "lot_size=1000 tick_size=10 min_size=5 price_granularity=0.5"
        );
    }
}
