//! Property-based tests for the split engine.
//!
//! - Debtor shares never exceed the total
//! - The payer's implicit share is within one unit of every debtor share
//! - Target rows always sum to the canonical target total
//! - Identical inputs yield identical results

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::divider::{payer_share, split_include_payer};
use super::orchestrator::compute_currency_aware_splits;
use crate::currency::props::rate_string;
use crate::currency::{FxRate, convert_minor_units, currency_meta};
use tripsync_shared::types::MinorUnits;

/// Strategy to generate expense totals (1 to 10 million minor units).
fn total() -> impl Strategy<Value = u64> {
    1u64..10_000_000
}

/// Strategy to generate 1 to 50 distinct debtor ids.
fn debtors() -> impl Strategy<Value = Vec<String>> {
    (1usize..=50).prop_map(|n| (0..n).map(|i| format!("debtor-{i}")).collect())
}

/// Strategy to pick currency codes with exponents 0, 2 and 3.
fn currency() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["JPY", "USD", "EUR", "KWD", "KRW", "GBP"])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Debtor shares sum to at most the total, and the payer share differs
    /// from every debtor share by at most one unit.
    #[test]
    fn prop_payer_share_is_fair(total in total(), debtors in debtors()) {
        let shares = split_include_payer(Decimal::from(total), &debtors).unwrap();
        prop_assert_eq!(shares.len(), debtors.len());

        let covered: u64 = shares.iter().map(|s| s.source_minor_units.get()).sum();
        prop_assert!(covered <= total);

        let payer = payer_share(MinorUnits::new(total), &shares).get();
        prop_assert_eq!(payer, total - covered);
        for share in &shares {
            prop_assert!(share.source_minor_units.get().abs_diff(payer) <= 1);
        }
    }

    /// Shares never increase along the debtor list.
    #[test]
    fn prop_shares_non_increasing(total in total(), debtors in debtors()) {
        let shares = split_include_payer(Decimal::from(total), &debtors).unwrap();
        prop_assert!(shares.windows(2).all(|w| w[0].source_minor_units >= w[1].source_minor_units));
    }

    /// Target rows sum exactly to the canonical total for any rate.
    #[test]
    fn prop_reconciled_rows_balance(
        total in total(),
        debtors in debtors(),
        src in currency(),
        tgt in currency(),
        rate in rate_string(),
    ) {
        let result = compute_currency_aware_splits(Decimal::from(total), &debtors, src, tgt, &rate).unwrap();

        prop_assert_eq!(
            result.debtor_target_total(),
            u128::from(result.total_target_minor_units.get())
        );
        prop_assert_eq!(
            result.debtor_source_total() + u128::from(result.payer_share_minor_units.get()),
            u128::from(total)
        );

        // Canonical total is the directly converted debtor subtotal
        let subtotal = u64::try_from(result.debtor_source_total()).unwrap();
        let expected = convert_minor_units(
            MinorUnits::new(subtotal),
            currency_meta(src).exponent,
            currency_meta(tgt).exponent,
            &FxRate::parse(&rate).unwrap(),
        )
        .unwrap();
        prop_assert_eq!(result.total_target_minor_units, expected);
    }

    /// Each reconciled row stays within one unit of its own conversion.
    #[test]
    fn prop_adjustment_at_most_one_unit_per_row(
        total in total(),
        debtors in debtors(),
        rate in rate_string(),
    ) {
        let result = compute_currency_aware_splits(Decimal::from(total), &debtors, "JPY", "USD", &rate).unwrap();
        let fx = FxRate::parse(&rate).unwrap();
        for share in &result.shares {
            let own = convert_minor_units(share.source_minor_units, 0, 2, &fx).unwrap();
            prop_assert!(share.target_minor_units.get().abs_diff(own.get()) <= 1);
        }
    }

    /// Identical arguments give identical results.
    #[test]
    fn prop_split_is_deterministic(
        total in total(),
        debtors in debtors(),
        rate in rate_string(),
    ) {
        let first = compute_currency_aware_splits(Decimal::from(total), &debtors, "USD", "JPY", &rate);
        let second = compute_currency_aware_splits(Decimal::from(total), &debtors, "USD", "JPY", &rate);
        prop_assert_eq!(first, second);
    }
}
