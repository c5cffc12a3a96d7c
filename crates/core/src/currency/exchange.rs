//! Exchange rate parsing.
//!
//! A rate arrives as a decimal string meaning "target units per one source
//! unit". It is turned into an integer scaled by 10^12 purely by digit
//! manipulation, so the scaled value is identical on every platform and no
//! binary floating point is ever involved.

use serde::{Serialize, Serializer};

use crate::error::SplitError;

/// Number of fractional digits kept from a rate string.
pub const RATE_SCALE_DIGITS: usize = 12;

/// Fixed-point scale of [`FxRate::scaled`] (10^12).
pub const RATE_SCALE: u128 = 1_000_000_000_000;

/// A strictly positive exchange rate in 10^12 fixed point.
///
/// Keeps the caller's original string for audit trails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FxRate {
    scaled: u128,
    raw: String,
}

impl FxRate {
    /// Parses a rate string of the form `digits[.digits]`.
    ///
    /// Fractional digits beyond the twelfth are truncated, shorter fractions
    /// are right-padded with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidRate`] for an empty or malformed string,
    /// a value that scales to zero, or one too large for 128 bits.
    pub fn parse(input: &str) -> Result<Self, SplitError> {
        let invalid = || SplitError::InvalidRate(input.to_string());

        let (whole, fraction) = match input.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (input, None),
        };

        if !is_digits(whole) {
            return Err(invalid());
        }
        let fraction = match fraction {
            Some(digits) if is_digits(digits) => digits,
            Some(_) => return Err(invalid()),
            None => "",
        };

        // ASCII digits only past this point, so byte slicing is safe
        let kept = &fraction[..fraction.len().min(RATE_SCALE_DIGITS)];
        let mut digits = String::with_capacity(whole.len() + RATE_SCALE_DIGITS);
        digits.push_str(whole);
        digits.push_str(kept);
        digits.extend(std::iter::repeat_n('0', RATE_SCALE_DIGITS - kept.len()));

        let scaled: u128 = digits.parse().map_err(|_| invalid())?;
        if scaled == 0 {
            return Err(invalid());
        }

        Ok(Self {
            scaled,
            raw: input.to_string(),
        })
    }

    /// The rate multiplied by [`RATE_SCALE`].
    #[must_use]
    pub const fn scaled(&self) -> u128 {
        self.scaled
    }

    /// The rate string as supplied by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true if the rate is exactly one.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        self.scaled == RATE_SCALE
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl std::str::FromStr for FxRate {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for FxRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
