//! Common value types used across the workspace.

pub mod currency;
pub mod id;
pub mod money;

pub use currency::CurrencyCode;
pub use id::DebtorId;
pub use money::{MinorUnits, MoneyError};
