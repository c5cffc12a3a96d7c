//! Split engine error types.
//!
//! Every error is a synchronous input-validation failure. None of them are
//! transient, so retrying the same call always fails the same way.

use thiserror::Error;
use tripsync_shared::AppError;

/// Errors raised while converting or splitting an expense.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// Total is not a positive whole number of minor units.
    #[error("Amount must be a positive whole number of minor units, got {0}")]
    InvalidAmount(String),

    /// No debtor is left after trimming and de-duplication.
    #[error("At least one debtor is required")]
    NoDebtors,

    /// Exchange rate string is malformed, zero, or negative.
    #[error("Invalid exchange rate: {0:?}")]
    InvalidRate(String),

    /// Conversion was asked to convert a fractional amount.
    #[error("Minor units must be a whole number, got {0}")]
    NonIntegerMinorUnits(String),

    /// An intermediate value exceeds the supported integer range.
    #[error("Amount is too large to convert exactly")]
    AmountOverflow,
}

impl SplitError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::NoDebtors => "NO_DEBTORS",
            Self::InvalidRate(_) => "INVALID_RATE",
            Self::NonIntegerMinorUnits(_) => "NON_INTEGER_MINOR_UNITS",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount(_)
            | Self::NoDebtors
            | Self::InvalidRate(_)
            | Self::NonIntegerMinorUnits(_) => 400,
            Self::AmountOverflow => 422,
        }
    }

    /// Returns true if this error is retryable. Split errors never are.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        false
    }
}

impl From<SplitError> for AppError {
    fn from(err: SplitError) -> Self {
        Self::Validation(err.to_string())
    }
}
