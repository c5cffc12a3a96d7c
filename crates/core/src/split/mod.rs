//! Expense splitting among debtors plus the payer.
//!
//! This module implements:
//! - Debtor normalization and the equal divider
//! - Currency-aware splits with reconciliation to a canonical total
//! - Request and result types shared with handlers and previews

pub mod divider;
pub mod orchestrator;
pub mod types;

#[cfg(test)]
mod props;

pub use divider::{
    divide_among, normalize_debtors, payer_share, split_include_payer, validate_total,
};
pub use orchestrator::{Reconciliation, compute_currency_aware_splits, compute_splits, reconcile};
pub use types::{DebtorShare, Share, SplitRequest, SplitResult};
