//! Lot, tick, min size, and price granularity derivation.
//!
//! All arithmetic runs on `rust_decimal::Decimal`. Float inputs are parsed
//! from their shortest round-trip representation, so `0.1` is exactly one
//! tenth and `0.1` at 0 decimals yields a lot size of 1, not 0 or 2.
//! Integer outputs are always rounded up: rounding down would let an order
//! express an amount finer than the requested granularity.

use crate::error::{GranularityError, GranularityResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Largest coin decimals whose power of ten fits in a `Decimal`.
pub const MAX_COIN_DECIMALS: u8 = 28;

/// Lot size in base subunits for the given decimal unit.
///
/// # Arguments
/// * `smallest_decimal_unit` - Smallest tradeable base amount relative to one
///   whole unit (e.g. 0.001 for one thousandth).
/// * `coin_decimals` - Decimals of the base coin (e.g. 8 for APT, 6 for USDC).
///
/// # Errors
/// `NonPositiveUnit` when the unit is zero or negative.
pub fn get_lot_size(smallest_decimal_unit: f64, coin_decimals: u8) -> GranularityResult<u64> {
    lot_size_from_decimal(positive_unit(smallest_decimal_unit)?, coin_decimals)
}

/// Tick size in quote subunits for the given decimal unit.
///
/// Same derivation as [`get_lot_size`], applied to the quote coin.
pub fn get_tick_size(smallest_decimal_unit: f64, coin_decimals: u8) -> GranularityResult<u64> {
    tick_size_from_decimal(positive_unit(smallest_decimal_unit)?, coin_decimals)
}

/// Minimum order size, in lots, covering `smallest_decimal_size` of base.
///
/// `smallest_decimal_size` is always denominated in the base coin.
///
/// # Errors
/// `ZeroLotSize` when `lot_size == 0`, `NegativeSize` for negative sizes.
pub fn get_min_size(
    smallest_decimal_size: f64,
    base_coin_decimals: u8,
    lot_size: u64,
) -> GranularityResult<u64> {
    if smallest_decimal_size < 0.0 {
        return Err(GranularityError::NegativeSize(
            smallest_decimal_size.to_string(),
        ));
    }
    min_size_from_decimal(
        decimal_at_least(smallest_decimal_size)?,
        base_coin_decimals,
        lot_size,
    )
}

/// Minimum quote per base price increment.
///
/// With a base granularity of 0.001 and a quote granularity of 0.01, prices
/// can only move in steps of 10 quote per base. Inputs outside the exact
/// decimal range fall back to float arithmetic.
///
/// # Errors
/// `NonPositiveUnit` when the base granularity is zero or negative.
pub fn get_min_quote_per_base(
    smallest_decimal_size_base: f64,
    smallest_decimal_size_quote: f64,
) -> GranularityResult<f64> {
    if !smallest_decimal_size_quote.is_finite() {
        return Err(GranularityError::NotRepresentable(
            smallest_decimal_size_quote.to_string(),
        ));
    }
    positive_unit(smallest_decimal_size_base)?;

    let exact = exact_decimal(smallest_decimal_size_base)
        .zip(exact_decimal(smallest_decimal_size_quote))
        .and_then(|(base, quote)| min_quote_per_base_from_decimal(base, quote).ok())
        .and_then(|ratio| ratio.to_f64());
    let ratio = match exact {
        Some(ratio) => ratio,
        None => (1.0 / smallest_decimal_size_base) * smallest_decimal_size_quote,
    };

    if ratio.is_finite() {
        Ok(ratio)
    } else {
        Err(GranularityError::Overflow(format!(
            "(1 / {smallest_decimal_size_base}) * {smallest_decimal_size_quote}"
        )))
    }
}

/// [`get_lot_size`] over an exact decimal unit.
pub fn lot_size_from_decimal(
    smallest_decimal_unit: Decimal,
    coin_decimals: u8,
) -> GranularityResult<u64> {
    if smallest_decimal_unit <= Decimal::ZERO {
        return Err(GranularityError::NonPositiveUnit(
            smallest_decimal_unit.to_string(),
        ));
    }
    ceil_to_u64(to_subunits(smallest_decimal_unit, coin_decimals)?)
}

/// [`get_tick_size`] over an exact decimal unit.
pub fn tick_size_from_decimal(
    smallest_decimal_unit: Decimal,
    coin_decimals: u8,
) -> GranularityResult<u64> {
    lot_size_from_decimal(smallest_decimal_unit, coin_decimals)
}

/// [`get_min_size`] over an exact decimal size.
pub fn min_size_from_decimal(
    smallest_decimal_size: Decimal,
    base_coin_decimals: u8,
    lot_size: u64,
) -> GranularityResult<u64> {
    if lot_size == 0 {
        return Err(GranularityError::ZeroLotSize);
    }
    if smallest_decimal_size < Decimal::ZERO {
        return Err(GranularityError::NegativeSize(
            smallest_decimal_size.to_string(),
        ));
    }

    // ceil(x / n) == ceil(ceil(x) / n) for integer n > 0. The subunit total
    // may exceed u64 while the lot count does not.
    let subunits = to_subunits(smallest_decimal_size, base_coin_decimals)?.ceil();
    let whole = subunits
        .to_u128()
        .ok_or_else(|| GranularityError::Overflow(format!("{subunits} exceeds u128")))?;
    let lots = whole.div_ceil(u128::from(lot_size));
    u64::try_from(lots)
        .map_err(|_| GranularityError::Overflow(format!("{lots} lots exceed u64")))
}

/// [`get_min_quote_per_base`] over exact decimals.
pub fn min_quote_per_base_from_decimal(
    smallest_decimal_size_base: Decimal,
    smallest_decimal_size_quote: Decimal,
) -> GranularityResult<Decimal> {
    if smallest_decimal_size_base <= Decimal::ZERO {
        return Err(GranularityError::NonPositiveUnit(
            smallest_decimal_size_base.to_string(),
        ));
    }
    Decimal::ONE
        .checked_div(smallest_decimal_size_base)
        .and_then(|per_base| per_base.checked_mul(smallest_decimal_size_quote))
        .ok_or_else(|| {
            GranularityError::Overflow(format!(
                "(1 / {smallest_decimal_size_base}) * {smallest_decimal_size_quote}"
            ))
        })
}

fn positive_unit(value: f64) -> GranularityResult<Decimal> {
    if value <= 0.0 {
        return Err(GranularityError::NonPositiveUnit(value.to_string()));
    }
    decimal_at_least(value)
}

/// Shortest round-trip decimal of `value`, when it fits a `Decimal` as is.
fn exact_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_str_exact(&value.to_string()).ok()
}

/// Smallest decimal with at most 28 fractional digits that is not below
/// `value`.
///
/// Equals `value` whenever its shortest form has at most 28 fractional
/// digits. Otherwise the last kept digit is rounded up. Every multiple of
/// `10^-d` with `d <= 28` lies on that grid, so ceilings at up to 28 coin
/// decimals are unchanged by the rounding.
fn decimal_at_least(value: f64) -> GranularityResult<Decimal> {
    let not_representable = || GranularityError::NotRepresentable(value.to_string());
    if !value.is_finite() {
        return Err(not_representable());
    }

    // `{:e}` prints the shortest round-trip digits, e.g. "1.2345e-13".
    let shortest = format!("{value:e}");
    let (mantissa, exponent) = shortest.split_once('e').ok_or_else(not_representable)?;
    let exponent: i64 = exponent.parse().map_err(|_| not_representable())?;
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits: i128 = format!("{whole}{fraction}")
        .parse()
        .map_err(|_| not_representable())?;
    let scale = fraction.len() as i64 - exponent;

    if scale < 0 {
        return u32::try_from(-scale)
            .ok()
            .and_then(|zeros| 10i128.checked_pow(zeros))
            .and_then(|factor| digits.checked_mul(factor))
            .and_then(|integer| Decimal::try_from_i128_with_scale(integer, 0).ok())
            .ok_or_else(|| GranularityError::Overflow(format!("{value} exceeds Decimal")));
    }

    let max_scale = i64::from(MAX_COIN_DECIMALS);
    let (kept, scale) = if scale <= max_scale {
        (digits, scale)
    } else {
        let dropped = u32::try_from(scale - max_scale)
            .ok()
            .and_then(|excess| 10i128.checked_pow(excess));
        // Quotient truncates toward zero, which is already the ceiling for
        // negatives.
        let (quotient, remainder) = match dropped {
            Some(divisor) => (digits / divisor, digits % divisor),
            None => (0, digits),
        };
        let kept = if remainder > 0 { quotient + 1 } else { quotient };
        (kept, max_scale)
    };

    u32::try_from(scale)
        .ok()
        .and_then(|scale| Decimal::try_from_i128_with_scale(kept, scale).ok())
        .ok_or_else(not_representable)
}

fn pow10(decimals: u8) -> GranularityResult<Decimal> {
    if decimals > MAX_COIN_DECIMALS {
        return Err(GranularityError::Overflow(format!(
            "coin decimals {decimals} exceed {MAX_COIN_DECIMALS}"
        )));
    }
    Ok(Decimal::from_i128_with_scale(10i128.pow(u32::from(decimals)), 0))
}

fn to_subunits(amount: Decimal, decimals: u8) -> GranularityResult<Decimal> {
    amount
        .checked_mul(pow10(decimals)?)
        .ok_or_else(|| GranularityError::Overflow(format!("{amount} * 10^{decimals}")))
}

fn ceil_to_u64(value: Decimal) -> GranularityResult<u64> {
    value
        .ceil()
        .to_u64()
        .ok_or_else(|| GranularityError::Overflow(format!("{value} exceeds u64")))
}
