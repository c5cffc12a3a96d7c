//! Equal split among debtors plus the payer.
//!
//! The payer counts in the divisor but is never emitted: their share is
//! whatever is left after the debtors' shares. Remainder units go to the
//! earliest debtors in list order, one each, so the result depends only on
//! the total and the ordered debtor list.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tripsync_shared::types::{DebtorId, MinorUnits};

use super::types::DebtorShare;
use crate::error::SplitError;

/// Trims ids, drops blanks, and removes duplicates keeping the first
/// occurrence.
#[must_use]
pub fn normalize_debtors<S: AsRef<str>>(ids: &[S]) -> Vec<DebtorId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter()
        .filter_map(|raw| DebtorId::parse(raw.as_ref()))
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Validates an expense total: a whole, strictly positive minor-unit amount.
///
/// # Errors
///
/// Returns [`SplitError::InvalidAmount`] otherwise.
pub fn validate_total(total: Decimal) -> Result<MinorUnits, SplitError> {
    match MinorUnits::from_decimal(total) {
        Ok(amount) if !amount.is_zero() => Ok(amount),
        _ => Err(SplitError::InvalidAmount(total.to_string())),
    }
}

/// Splits `total_minor_units` among the payer and `debtor_ids`, returning
/// the debtors' shares.
///
/// # Errors
///
/// - [`SplitError::InvalidAmount`] if the total is not a positive integer
/// - [`SplitError::NoDebtors`] if no debtor survives normalization
pub fn split_include_payer<S: AsRef<str>>(
    total_minor_units: Decimal,
    debtor_ids: &[S],
) -> Result<Vec<DebtorShare>, SplitError> {
    let total = validate_total(total_minor_units)?;
    let debtors = normalize_debtors(debtor_ids);
    divide_among(total, &debtors)
}

/// Typed core of [`split_include_payer`] for already-normalized debtors.
///
/// # Errors
///
/// - [`SplitError::InvalidAmount`] if `total` is zero
/// - [`SplitError::NoDebtors`] if `debtors` is empty
pub fn divide_among(
    total: MinorUnits,
    debtors: &[DebtorId],
) -> Result<Vec<DebtorShare>, SplitError> {
    if total.is_zero() {
        return Err(SplitError::InvalidAmount(total.to_string()));
    }
    if debtors.is_empty() {
        return Err(SplitError::NoDebtors);
    }

    // Payer counts in the divisor
    let parts = u64::try_from(debtors.len())
        .ok()
        .and_then(|k| k.checked_add(1))
        .ok_or(SplitError::AmountOverflow)?;
    let base = total.get() / parts;
    let mut remainder = total.get() % parts;

    let shares = debtors
        .iter()
        .map(|debtor_id| {
            let amount = if remainder > 0 {
                remainder -= 1;
                base + 1
            } else {
                base
            };
            DebtorShare {
                debtor_id: debtor_id.clone(),
                source_minor_units: MinorUnits::new(amount),
            }
        })
        .collect();

    Ok(shares)
}

/// The payer's implicit share: what the debtors do not cover.
#[must_use]
pub fn payer_share(total: MinorUnits, shares: &[DebtorShare]) -> MinorUnits {
    let covered: u64 = shares.iter().map(|s| s.source_minor_units.get()).sum();
    total.checked_sub(MinorUnits::new(covered)).unwrap_or_default()
}
