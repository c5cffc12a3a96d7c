//! Split request and result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tripsync_shared::types::{CurrencyCode, DebtorId, MinorUnits};

use crate::currency::FxRate;

/// A debtor's share in the expense's source currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtorShare {
    /// Debtor owing the share.
    pub debtor_id: DebtorId,
    /// Share in source minor units.
    pub source_minor_units: MinorUnits,
}

/// One immutable row of a currency-aware split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Share {
    /// Debtor owing the share.
    #[serde(rename = "userId")]
    pub debtor_id: DebtorId,
    /// Share in source minor units.
    #[serde(rename = "shareSrcMinor")]
    pub source_minor_units: MinorUnits,
    /// Share in target minor units, after reconciliation.
    #[serde(rename = "shareTgtMinor")]
    pub target_minor_units: MinorUnits,
}

/// Ledger-balanced result of splitting one expense.
///
/// `shares` target amounts always sum to `total_target_minor_units`, and
/// source amounts plus `payer_share_minor_units` sum to
/// `total_source_minor_units`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResult {
    /// Debtor rows in normalized debtor order.
    #[serde(rename = "rows")]
    pub shares: Vec<Share>,
    /// Expense total in source minor units, payer included.
    #[serde(rename = "totalSrcMinor")]
    pub total_source_minor_units: MinorUnits,
    /// Debtor subtotal converted directly to target minor units.
    #[serde(rename = "totalTgtMinor")]
    pub total_target_minor_units: MinorUnits,
    /// The payer's implicit share in source minor units.
    #[serde(rename = "payerShareSrcMinor")]
    pub payer_share_minor_units: MinorUnits,
    /// Source currency code.
    pub source_currency: CurrencyCode,
    /// Target currency code.
    pub target_currency: CurrencyCode,
    /// The locked rate used for every conversion.
    pub fx_rate: FxRate,
}

impl SplitResult {
    /// Sum of source shares across debtors.
    #[must_use]
    pub fn debtor_source_total(&self) -> u128 {
        self.shares
            .iter()
            .map(|s| u128::from(s.source_minor_units.get()))
            .sum()
    }

    /// Sum of target shares across debtors.
    #[must_use]
    pub fn debtor_target_total(&self) -> u128 {
        self.shares
            .iter()
            .map(|s| u128::from(s.target_minor_units.get()))
            .sum()
    }
}

/// Wire form of a split request, as sent by the expense handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitRequest {
    /// Total in source minor units. Decimal so fractional input is caught.
    pub total_src_minor: Decimal,
    /// Debtor ids, payer excluded, in significant order.
    pub debtor_ids: Vec<String>,
    /// Source currency code.
    pub src_currency: String,
    /// Target currency code.
    pub tgt_currency: String,
    /// Rate as target units per one source unit.
    pub fx_rate: String,
}
