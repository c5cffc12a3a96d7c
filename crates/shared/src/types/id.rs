//! Typed identifiers for split participants.
//!
//! Debtor ids are opaque strings supplied by the caller. The split engine only
//! relies on their order and equality, so the wrapper keeps them verbatim apart
//! from surrounding whitespace.

use serde::{Deserialize, Serialize};

/// Identifier of a trip participant who owes part of an expense.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DebtorId(String);

impl DebtorId {
    /// Builds an id from raw input, trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing is left after trimming.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for DebtorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DebtorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
