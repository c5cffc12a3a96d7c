//! Rendering minor units for previews and reading major-unit input.

use rust_decimal::Decimal;
use tripsync_shared::types::MinorUnits;

use super::registry::CurrencyMeta;
use crate::error::SplitError;

/// Formats `amount` in major units with the currency symbol and thousands
/// separators, e.g. `$1,099.00`, `¥10,000`, `CHF 12.50`.
#[must_use]
pub fn format_minor(amount: MinorUnits, meta: &CurrencyMeta) -> String {
    let exponent = usize::try_from(meta.exponent).unwrap_or(usize::MAX);
    let digits = amount.get().to_string();
    let digits = if digits.len() <= exponent {
        format!("{digits:0>width$}", width = exponent.saturating_add(1))
    } else {
        digits
    };
    let (whole, fraction) = digits.split_at(digits.len() - exponent.min(digits.len()));

    let mut number = group_thousands(whole);
    if !fraction.is_empty() {
        number.push('.');
        number.push_str(fraction);
    }

    let symbol: &str = &meta.symbol;
    if symbol.ends_with(|c: char| c.is_ascii_alphabetic()) {
        format!("{symbol} {number}")
    } else {
        format!("{symbol}{number}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Converts a major-unit decimal (e.g. `100.00` USD) into minor units of
/// `meta`.
///
/// # Errors
///
/// Returns [`SplitError::InvalidAmount`] when the amount has more decimal
/// places than the currency allows, is negative, or is out of range.
pub fn major_to_minor(amount: Decimal, meta: &CurrencyMeta) -> Result<MinorUnits, SplitError> {
    let invalid = || SplitError::InvalidAmount(amount.to_string());
    let factor = 10u64
        .checked_pow(meta.exponent)
        .map(Decimal::from)
        .ok_or_else(invalid)?;
    let minor = amount.checked_mul(factor).ok_or_else(invalid)?;
    MinorUnits::from_decimal(minor).map_err(|_| invalid())
}
