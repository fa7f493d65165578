//! Property tests for the granularity formulas.
//!
//! Decimal inputs are generated as `mantissa * 10^-scale` so the exact
//! expected value can be computed in integer arithmetic. Scales reach past
//! the 28 fractional digits a `Decimal` holds, and subunit totals past
//! `u64::MAX`.

use econia_core::{
    get_lot_size, get_min_quote_per_base, get_min_size, get_tick_size, GranularityError,
};
use proptest::prelude::*;

/// Nearest float to `mantissa * 10^-scale`; its shortest form is exact for
/// mantissas below 10^15.
fn decimal_input(mantissa: u64, scale: u32) -> f64 {
    format!("{mantissa}e-{scale}").parse().unwrap()
}

fn pow10(exponent: u32) -> u128 {
    10u128.pow(exponent)
}

fn lot_sizes() -> impl Strategy<Value = u64> {
    prop_oneof![1u64..1_000, 1_000u64..1_000_000, (1u64 << 40)..u64::MAX]
}

proptest! {
    #[test]
    fn lot_size_equals_tick_size(
        mantissa in 1u64..1_000_000,
        extra in 0u32..=22,
        decimals in 0u8..=28,
    ) {
        let scale = u32::from(decimals).saturating_sub(12) + extra;
        let unit = decimal_input(mantissa, scale);
        prop_assert_eq!(get_lot_size(unit, decimals), get_tick_size(unit, decimals));
    }

    #[test]
    fn lot_size_is_ceiling_of_exact_subunits(
        mantissa in 1u64..1_000_000,
        extra in 0u32..=22,
        decimals in 0u8..=28,
    ) {
        // Keeps unit * 10^decimals below 10^18, inside u64.
        let scale = u32::from(decimals).saturating_sub(12) + extra;
        let lot = get_lot_size(decimal_input(mantissa, scale), decimals).unwrap();

        // unit * 10^decimals == mantissa * 10^decimals / 10^scale
        let numerator = u128::from(mantissa) * pow10(u32::from(decimals));
        prop_assert_eq!(u128::from(lot), numerator.div_ceil(pow10(scale)));
    }

    #[test]
    fn tiny_units_round_up_to_one_subunit(
        unit in f64::MIN_POSITIVE..1e-12,
        decimals in 0u8..=12,
    ) {
        prop_assert_eq!(get_lot_size(unit, decimals).unwrap(), 1);
        prop_assert_eq!(get_min_size(unit, decimals, 1).unwrap(), 1);
    }

    #[test]
    fn min_size_of_zero_is_zero(decimals in 0u8..=28, lot_size in 1u64..u64::MAX) {
        prop_assert_eq!(get_min_size(0.0, decimals, lot_size).unwrap(), 0);
    }

    #[test]
    fn min_size_is_ceiling_of_exact_lots(
        mantissa in 0u64..1_000_000,
        extra in 0u32..=30,
        decimals in 0u8..=28,
        lot_size in lot_sizes(),
    ) {
        // Keeps the subunit total below 10^28, inside Decimal but not u64.
        let scale = u32::from(decimals).saturating_sub(22) + extra;
        let min = get_min_size(decimal_input(mantissa, scale), decimals, lot_size);

        let numerator = u128::from(mantissa) * pow10(u32::from(decimals));
        let expected = numerator.div_ceil(pow10(scale)).div_ceil(u128::from(lot_size));
        match u64::try_from(expected) {
            Ok(expected) => prop_assert_eq!(min, Ok(expected)),
            Err(_) => prop_assert!(matches!(min, Err(GranularityError::Overflow(_)))),
        }
    }

    #[test]
    fn min_size_is_monotonic(
        a in 0u64..1_000_000,
        b in 0u64..1_000_000,
        extra in 0u32..=30,
        decimals in 0u8..=28,
        lot_size in lot_sizes(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let scale = u32::from(decimals).saturating_sub(22) + extra;
        let min_low = get_min_size(decimal_input(low, scale), decimals, lot_size);
        let min_high = get_min_size(decimal_input(high, scale), decimals, lot_size);

        if let Ok(high) = min_high {
            prop_assert!(min_low.is_ok_and(|low| low <= high));
        }
    }

    #[test]
    fn min_quote_per_base_scales_with_inputs(
        base in 1u64..100_000,
        quote in 1u64..100_000,
        scale in 0u32..6,
    ) {
        let base = decimal_input(base, scale);
        let quote = decimal_input(quote, scale);
        let ratio = get_min_quote_per_base(base, quote).unwrap();

        let halved = get_min_quote_per_base(base * 2.0, quote).unwrap();
        let doubled = get_min_quote_per_base(base, quote * 2.0).unwrap();

        prop_assert!((halved * 2.0 - ratio).abs() <= ratio * 1e-12);
        prop_assert!((doubled - ratio * 2.0).abs() <= ratio * 1e-12);
    }
}

#[test]
fn concrete_cases() {
    assert_eq!(get_lot_size(0.001, 6).unwrap(), 1000);
    assert_eq!(get_lot_size(0.1, 0).unwrap(), 1);
    assert_eq!(get_min_size(0.01, 6, 1000).unwrap(), 10);
    assert_eq!(get_min_quote_per_base(0.001, 0.01).unwrap(), 10.0);
}

#[test]
fn beyond_decimal_precision_and_u64_subunits() {
    assert_eq!(get_lot_size(1e-29, 6).unwrap(), 1);
    assert_eq!(get_lot_size(1.2345678901234567e-13, 18).unwrap(), 123_457);
    assert_eq!(get_min_size(10.0, 18, 100_000_000_000_000).unwrap(), 100_000);
    assert_eq!(get_min_size(20.0, 18, 100_000_000_000_000).unwrap(), 200_000);
}

#[test]
fn domain_errors() {
    assert!(get_lot_size(0.0, 6).is_err());
    assert!(get_tick_size(0.0, 6).is_err());
    assert!(get_min_size(0.01, 6, 0).is_err());
    assert!(get_min_quote_per_base(0.0, 0.01).is_err());
}
