//! Currency-aware split with ledger reconciliation.
//!
//! Each debtor's source share is converted on its own, which can drift from
//! converting the debtor subtotal directly by up to `n - 1` minor units. The
//! directly converted subtotal is the ground truth: rows are nudged one unit
//! at a time until they sum to it exactly.

use rust_decimal::Decimal;
use tracing::{debug, trace, warn};
use tripsync_shared::types::{DebtorId, MinorUnits};

use super::divider::{divide_among, normalize_debtors, payer_share, validate_total};
use super::types::{Share, SplitRequest, SplitResult};
use crate::currency::{CurrencyMeta, FxRate, convert_minor_units, currency_meta};
use crate::error::SplitError;

/// Outcome of the reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Independently rounded rows already matched the canonical total.
    Balanced,
    /// Rows were short; this many units were added from the front.
    RaisedFromFront(u64),
    /// Rows overshot; this many units were removed from the back.
    LoweredFromBack(u64),
}

/// Splits an expense among the payer and debtors and converts every debtor
/// share to the target currency at a locked rate.
///
/// All validation happens before any result is built: the call returns a
/// complete reconciled result or an error, never anything in between.
///
/// # Errors
///
/// - [`SplitError::InvalidAmount`] if the total is not a positive integer
/// - [`SplitError::NoDebtors`] if no debtor survives normalization
/// - [`SplitError::InvalidRate`] if `fx_rate` does not parse
/// - [`SplitError::AmountOverflow`] if a conversion does not fit
pub fn compute_currency_aware_splits<S: AsRef<str>>(
    total_src_minor: Decimal,
    debtor_ids: &[S],
    src_currency: &str,
    tgt_currency: &str,
    fx_rate: &str,
) -> Result<SplitResult, SplitError> {
    let total = validate_total(total_src_minor)?;
    let debtors = normalize_debtors(debtor_ids);
    if debtors.is_empty() {
        return Err(SplitError::NoDebtors);
    }
    let rate = FxRate::parse(fx_rate)?;

    compute_splits(
        total,
        &debtors,
        &currency_meta(src_currency),
        &currency_meta(tgt_currency),
        &rate,
    )
}

/// Typed core of [`compute_currency_aware_splits`] for normalized debtors
/// and an already parsed rate.
///
/// # Errors
///
/// See [`compute_currency_aware_splits`].
pub fn compute_splits(
    total: MinorUnits,
    debtors: &[DebtorId],
    source: &CurrencyMeta,
    target: &CurrencyMeta,
    rate: &FxRate,
) -> Result<SplitResult, SplitError> {
    if source.code == target.code && !rate.is_identity() {
        warn!(
            currency = %source.code,
            fx_rate = %rate,
            "Same-currency split with a non-identity rate"
        );
    }

    let source_shares = divide_among(total, debtors)?;

    let mut target_amounts = source_shares
        .iter()
        .map(|share| -> Result<u64, SplitError> {
            let converted = convert_minor_units(
                share.source_minor_units,
                source.exponent,
                target.exponent,
                rate,
            )?;
            trace!(
                debtor_id = %share.debtor_id,
                source = %share.source_minor_units,
                target = %converted,
                "Converted share"
            );
            Ok(converted.get())
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Shares never exceed the total, so the subtotal fits
    let subtotal = MinorUnits::new(
        source_shares
            .iter()
            .map(|s| s.source_minor_units.get())
            .sum(),
    );
    let canonical = convert_minor_units(subtotal, source.exponent, target.exponent, rate)?;

    let outcome = reconcile(&mut target_amounts, canonical.get());
    if outcome != Reconciliation::Balanced {
        debug!(
            source_currency = %source.code,
            target_currency = %target.code,
            fx_rate = %rate,
            debtors = debtors.len(),
            canonical_total = %canonical,
            ?outcome,
            "Reconciled rounding drift"
        );
    }

    let shares = source_shares
        .iter()
        .zip(target_amounts)
        .map(|(share, target_amount)| Share {
            debtor_id: share.debtor_id.clone(),
            source_minor_units: share.source_minor_units,
            target_minor_units: MinorUnits::new(target_amount),
        })
        .collect();

    Ok(SplitResult {
        shares,
        total_source_minor_units: total,
        total_target_minor_units: canonical,
        payer_share_minor_units: payer_share(total, &source_shares),
        source_currency: source.code.clone(),
        target_currency: target.code.clone(),
        fx_rate: rate.clone(),
    })
}

/// Forces `amounts` to sum to `canonical`.
///
/// Shortfall is added one unit per row starting from the first row;
/// overshoot is removed one unit per row starting from the last, skipping
/// rows already at zero. Both wrap around if the drift exceeds the row count.
pub fn reconcile(amounts: &mut [u64], canonical: u64) -> Reconciliation {
    let len = amounts.len();
    if len == 0 {
        return Reconciliation::Balanced;
    }

    let sum: u128 = amounts.iter().map(|&a| u128::from(a)).sum();
    let canonical = u128::from(canonical);

    if sum < canonical {
        // Bounded by canonical, which fits in u64
        let missing = u64::try_from(canonical - sum).unwrap_or(u64::MAX);
        for step in 0..missing {
            let idx = usize::try_from(step).map_or(0, |s| s % len);
            amounts[idx] += 1;
        }
        Reconciliation::RaisedFromFront(missing)
    } else if sum > canonical {
        let excess = sum - canonical;
        let mut remaining = excess;
        let mut idx = len;
        while remaining > 0 {
            idx = if idx == 0 { len - 1 } else { idx - 1 };
            if amounts[idx] > 0 {
                amounts[idx] -= 1;
                remaining -= 1;
            }
        }
        Reconciliation::LoweredFromBack(u64::try_from(excess).unwrap_or(u64::MAX))
    } else {
        Reconciliation::Balanced
    }
}

impl SplitRequest {
    /// Runs [`compute_currency_aware_splits`] on this request.
    ///
    /// # Errors
    ///
    /// See [`compute_currency_aware_splits`].
    pub fn compute(&self) -> Result<SplitResult, SplitError> {
        compute_currency_aware_splits(
            self.total_src_minor,
            &self.debtor_ids,
            &self.src_currency,
            &self.tgt_currency,
            &self.fx_rate,
        )
    }
}
