//! Currency conversion between minor units.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - All arithmetic is integer arithmetic on 128-bit values
//! - Round half up (ties away from zero) to the target's minor unit
//! - Overflow is reported, never wrapped

use rust_decimal::Decimal;
use tripsync_shared::types::{MinorUnits, MoneyError};

use super::exchange::{FxRate, RATE_SCALE};
use crate::error::SplitError;

/// Converts `amount` from source to target minor units at `rate`.
///
/// ```text
/// numerator   = amount * scaled_rate * 10^tgt_exponent
/// denominator = 10^12 * 10^src_exponent
/// result      = numerator / denominator, rounded half up
/// ```
///
/// # Errors
///
/// Returns [`SplitError::AmountOverflow`] if an intermediate product or the
/// result does not fit.
pub fn convert_minor_units(
    amount: MinorUnits,
    src_exponent: u32,
    tgt_exponent: u32,
    rate: &FxRate,
) -> Result<MinorUnits, SplitError> {
    let numerator = u128::from(amount.get())
        .checked_mul(rate.scaled())
        .and_then(|v| v.checked_mul(pow10(tgt_exponent)?))
        .ok_or(SplitError::AmountOverflow)?;
    let denominator = pow10(src_exponent)
        .and_then(|v| v.checked_mul(RATE_SCALE))
        .ok_or(SplitError::AmountOverflow)?;

    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    // remainder * 2 >= denominator, without the doubling overflow
    let rounded = if remainder >= denominator - remainder {
        quotient + 1
    } else {
        quotient
    };

    u64::try_from(rounded)
        .map(MinorUnits::new)
        .map_err(|_| SplitError::AmountOverflow)
}

/// Converts a source amount given as a decimal, parsing `fx_rate` first.
///
/// This is the boundary form used by handlers and previews; the amount must
/// already be a whole number of minor units.
///
/// # Errors
///
/// - [`SplitError::InvalidRate`] if `fx_rate` does not parse
/// - [`SplitError::NonIntegerMinorUnits`] if `src_minor` has a fractional part
/// - [`SplitError::InvalidAmount`] if `src_minor` is negative
/// - [`SplitError::AmountOverflow`] if the result does not fit
pub fn convert_minor(
    src_minor: Decimal,
    src_exponent: u32,
    tgt_exponent: u32,
    fx_rate: &str,
) -> Result<MinorUnits, SplitError> {
    let rate = FxRate::parse(fx_rate)?;
    let amount = MinorUnits::from_decimal(src_minor).map_err(|err| match err {
        MoneyError::Fractional(v) => SplitError::NonIntegerMinorUnits(v.to_string()),
        MoneyError::Negative(v) => SplitError::InvalidAmount(v.to_string()),
        MoneyError::OutOfRange(_) => SplitError::AmountOverflow,
    })?;
    convert_minor_units(amount, src_exponent, tgt_exponent, &rate)
}

fn pow10(exponent: u32) -> Option<u128> {
    10u128.checked_pow(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn rate(s: &str) -> FxRate {
        FxRate::parse(s).unwrap()
    }

    #[test]
    fn test_same_currency_identity() {
        let result = convert_minor_units(MinorUnits::new(10_000), 2, 2, &rate("1")).unwrap();
        assert_eq!(result, MinorUnits::new(10_000));
    }

    #[test]
    fn test_usd_to_jpy() {
        // 1.00 USD * 150 = 150 JPY
        let result = convert_minor_units(MinorUnits::new(100), 2, 0, &rate("150")).unwrap();
        assert_eq!(result, MinorUnits::new(150));
    }

    #[test]
    fn test_jpy_to_usd() {
        // 7500 JPY * 0.006667 = 50.0025 USD -> 5000 cents
        let result = convert_minor_units(MinorUnits::new(7500), 0, 2, &rate("0.006667")).unwrap();
        assert_eq!(result, MinorUnits::new(5000));

        // 2500 JPY * 0.006667 = 16.6675 USD -> 1667 cents
        let result = convert_minor_units(MinorUnits::new(2500), 0, 2, &rate("0.006667")).unwrap();
        assert_eq!(result, MinorUnits::new(1667));
    }

    #[test]
    fn test_usd_to_jpy_fractional_rate() {
        // 5.50 USD * 150.555 = 828.0525 JPY -> 828
        let result = convert_minor_units(MinorUnits::new(550), 2, 0, &rate("150.555")).unwrap();
        assert_eq!(result, MinorUnits::new(828));
    }

    #[rstest]
    #[case(1, "0.5", 1)] // exact half rounds up
    #[case(3, "0.5", 2)] // 1.5 -> 2
    #[case(5, "0.5", 3)] // 2.5 -> 3, not banker's 2
    #[case(1, "0.499999999999", 0)]
    #[case(1, "0.3", 0)]
    #[case(3, "0.3", 1)] // 0.9 -> 1
    fn test_round_half_up(#[case] amount: u64, #[case] fx: &str, #[case] expected: u64) {
        let result = convert_minor_units(MinorUnits::new(amount), 2, 2, &rate(fx)).unwrap();
        assert_eq!(result, MinorUnits::new(expected));
    }

    #[test]
    fn test_zero_amount() {
        let result = convert_minor_units(MinorUnits::ZERO, 2, 0, &rate("150")).unwrap();
        assert_eq!(result, MinorUnits::ZERO);
    }

    #[test]
    fn test_three_digit_exponent() {
        // 1.000 KWD * 3.25 = 3.25 USD
        let result = convert_minor_units(MinorUnits::new(1000), 3, 2, &rate("3.25")).unwrap();
        assert_eq!(result, MinorUnits::new(325));
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = convert_minor_units(MinorUnits::new(u64::MAX), 0, 2, &rate("1000"));
        assert_eq!(result, Err(SplitError::AmountOverflow));

        let result = convert_minor_units(MinorUnits::new(1), 0, 40, &rate("1"));
        assert_eq!(result, Err(SplitError::AmountOverflow));
    }

    #[test]
    fn test_convert_minor_boundary() {
        assert_eq!(
            convert_minor(dec!(7500), 0, 2, "0.006667"),
            Ok(MinorUnits::new(5000))
        );
        assert_eq!(
            convert_minor(dec!(10.5), 2, 2, "1"),
            Err(SplitError::NonIntegerMinorUnits("10.5".to_string()))
        );
        assert_eq!(
            convert_minor(dec!(-1), 2, 2, "1"),
            Err(SplitError::InvalidAmount("-1".to_string()))
        );
        assert_eq!(
            convert_minor(dec!(100), 2, 2, "0"),
            Err(SplitError::InvalidRate("0".to_string()))
        );
    }
}
