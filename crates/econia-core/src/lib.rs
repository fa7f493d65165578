//! Market granularity arithmetic for the Econia registry.
//!
//! Converts human-meaningful decimal precision into the integer subunit
//! parameters a market is registered with:
//! - `lot_size`: base subunits per lot
//! - `tick_size`: quote subunits per tick
//! - `min_size`: minimum order size, in lots
//! - price granularity: minimum quote-per-base increment

pub mod error;
pub mod granularity;
pub mod market;

pub use error::{GranularityError, GranularityResult};
pub use granularity::{
    get_lot_size, get_min_quote_per_base, get_min_size, get_tick_size, lot_size_from_decimal,
    min_quote_per_base_from_decimal, min_size_from_decimal, tick_size_from_decimal,
    MAX_COIN_DECIMALS,
};
pub use market::{MarketGranularity, MarketParams};
