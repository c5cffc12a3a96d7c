//! Integer minor-unit amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are whole counts of a currency's smallest unit (cents for USD,
//! yen for JPY). Decimal input is accepted only at the boundary and must be
//! integral; it is never truncated.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a decimal value cannot be represented as minor units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The value has a fractional part.
    #[error("Amount {0} is not a whole number of minor units")]
    Fractional(Decimal),

    /// The value is below zero.
    #[error("Amount {0} is negative")]
    Negative(Decimal),

    /// The value does not fit in 64 bits.
    #[error("Amount {0} is out of range")]
    OutOfRange(Decimal),
}

/// A non-negative amount in a currency's smallest unit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MinorUnits(pub u64);

impl MinorUnits {
    /// Zero minor units.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw minor-unit count.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw count.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Converts a decimal into minor units, rejecting anything that is not a
    /// non-negative whole number.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError`] for negative, fractional, or oversized values.
    pub fn from_decimal(value: Decimal) -> Result<Self, MoneyError> {
        if value < Decimal::ZERO {
            return Err(MoneyError::Negative(value));
        }
        if !value.fract().is_zero() {
            return Err(MoneyError::Fractional(value));
        }
        value
            .to_u64()
            .map(Self)
            .ok_or(MoneyError::OutOfRange(value))
    }

    /// Adds two amounts, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtracts `other`, returning `None` if the result would be negative.
    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl From<u64> for MinorUnits {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<MinorUnits> for Decimal {
    fn from(value: MinorUnits) -> Self {
        Self::from(value.0)
    }
}

impl std::fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
