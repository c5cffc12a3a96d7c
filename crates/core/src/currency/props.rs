//! Property-based tests for currency conversion.
//!
//! - Conversion is deterministic
//! - Rate one between equal exponents preserves the amount
//! - Conversion is monotonic in the amount
//! - Rounding error never exceeds half a minor unit

use proptest::prelude::*;
use rust_decimal::Decimal;
use tripsync_shared::types::MinorUnits;

use super::conversion::convert_minor_units;
use super::exchange::FxRate;

/// Strategy to generate rate strings (0.0000000001 to 999999.9999).
pub(crate) fn rate_string() -> impl Strategy<Value = String> {
    (1i64..10_000_000_000i64, 4u32..=10)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale).to_string())
}

/// Strategy to generate minor-unit amounts (0 to 1 billion).
fn amount() -> impl Strategy<Value = u64> {
    0u64..1_000_000_000
}

/// Strategy to generate currency exponents (0 to 3).
fn exponent() -> impl Strategy<Value = u32> {
    0u32..=3
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Rate strings produced by the decimal strategy always parse.
    #[test]
    fn prop_generated_rates_parse(rate in rate_string()) {
        prop_assert!(FxRate::parse(&rate).is_ok(), "rate {} should parse", rate);
    }

    /// Converting twice with identical inputs yields identical output.
    #[test]
    fn prop_convert_is_deterministic(
        value in amount(),
        src in exponent(),
        tgt in exponent(),
        rate in rate_string(),
    ) {
        let rate = FxRate::parse(&rate).unwrap();
        let first = convert_minor_units(MinorUnits::new(value), src, tgt, &rate);
        let second = convert_minor_units(MinorUnits::new(value), src, tgt, &rate);
        prop_assert_eq!(first, second);
    }

    /// Rate one between identical exponents returns the input.
    #[test]
    fn prop_identity_rate_preserves_amount(value in amount(), exp in exponent()) {
        let rate = FxRate::parse("1").unwrap();
        let result = convert_minor_units(MinorUnits::new(value), exp, exp, &rate).unwrap();
        prop_assert_eq!(result, MinorUnits::new(value));
    }

    /// A larger source amount never converts to a smaller target amount.
    #[test]
    fn prop_convert_is_monotonic(
        a in amount(),
        b in amount(),
        src in exponent(),
        tgt in exponent(),
        rate in rate_string(),
    ) {
        let rate = FxRate::parse(&rate).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = convert_minor_units(MinorUnits::new(lo), src, tgt, &rate).unwrap();
        let hi = convert_minor_units(MinorUnits::new(hi), src, tgt, &rate).unwrap();
        prop_assert!(lo <= hi);
    }

    /// The rounded result is within half a unit of the exact rational value.
    #[test]
    fn prop_rounding_error_at_most_half_unit(
        value in amount(),
        src in exponent(),
        tgt in exponent(),
        rate in rate_string(),
    ) {
        let rate = FxRate::parse(&rate).unwrap();
        let result = convert_minor_units(MinorUnits::new(value), src, tgt, &rate).unwrap();

        let numerator = u128::from(value) * rate.scaled() * 10u128.pow(tgt);
        let denominator = super::exchange::RATE_SCALE * 10u128.pow(src);
        let doubled_result = 2 * u128::from(result.get()) * denominator;
        let doubled_exact = 2 * numerator;
        let error = doubled_result.abs_diff(doubled_exact);
        prop_assert!(error <= denominator, "error {} exceeds half unit {}", error, denominator);
    }
}
