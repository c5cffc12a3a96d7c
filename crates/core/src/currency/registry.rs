//! Static currency metadata.
//!
//! The table is immutable and looked up by value, so concurrent callers never
//! share mutable state. Unknown codes resolve to a two-digit default instead of
//! failing, which keeps exotic currencies from blocking expense creation.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tripsync_shared::types::CurrencyCode;

/// Exponent assumed for currencies missing from the table.
pub const DEFAULT_EXPONENT: u32 = 2;

/// Code, minor-unit exponent and display symbol, in code order.
static CURRENCIES: &[(&str, u32, &str)] = &[
    ("AED", 2, "AED"),
    ("AUD", 2, "A$"),
    ("BHD", 3, "BD"),
    ("BRL", 2, "R$"),
    ("CAD", 2, "CA$"),
    ("CHF", 2, "CHF"),
    ("CLP", 0, "CLP$"),
    ("CNY", 2, "CN¥"),
    ("CZK", 2, "Kč"),
    ("DKK", 2, "kr"),
    ("EUR", 2, "€"),
    ("GBP", 2, "£"),
    ("HKD", 2, "HK$"),
    ("HUF", 2, "Ft"),
    ("IDR", 2, "Rp"),
    ("ILS", 2, "₪"),
    ("INR", 2, "₹"),
    ("ISK", 0, "kr"),
    ("JOD", 3, "JD"),
    ("JPY", 0, "¥"),
    ("KRW", 0, "₩"),
    ("KWD", 3, "KD"),
    ("MXN", 2, "MX$"),
    ("MYR", 2, "RM"),
    ("NOK", 2, "kr"),
    ("NZD", 2, "NZ$"),
    ("OMR", 3, "OMR"),
    ("PHP", 2, "₱"),
    ("PLN", 2, "zł"),
    ("PYG", 0, "₲"),
    ("SEK", 2, "kr"),
    ("SGD", 2, "S$"),
    ("THB", 2, "฿"),
    ("TND", 3, "DT"),
    ("TRY", 2, "₺"),
    ("TWD", 2, "NT$"),
    ("UGX", 0, "USh"),
    ("USD", 2, "$"),
    ("VND", 0, "₫"),
    ("XAF", 0, "FCFA"),
    ("XOF", 0, "CFA"),
    ("ZAR", 2, "R"),
];

/// Display and precision metadata for a currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyMeta {
    /// Normalized currency code.
    pub code: CurrencyCode,
    /// Number of minor-unit decimal digits (2 for USD, 0 for JPY).
    pub exponent: u32,
    /// Display symbol; the code itself for unknown currencies.
    pub symbol: Cow<'static, str>,
}

/// Looks up metadata for `code`. Never fails.
///
/// Codes are matched after trimming and uppercasing. Unknown codes get
/// [`DEFAULT_EXPONENT`] and use the code as their symbol.
#[must_use]
pub fn currency_meta(code: &str) -> CurrencyMeta {
    let code = CurrencyCode::new(code);
    match lookup(code.as_str()) {
        Some(&(_, exponent, symbol)) => CurrencyMeta {
            code,
            exponent,
            symbol: Cow::Borrowed(symbol),
        },
        None => CurrencyMeta {
            symbol: Cow::Owned(code.as_str().to_string()),
            code,
            exponent: DEFAULT_EXPONENT,
        },
    }
}

/// Returns true if `code` is in the static table.
#[must_use]
pub fn is_known_currency(code: &str) -> bool {
    lookup(CurrencyCode::new(code).as_str()).is_some()
}

fn lookup(code: &str) -> Option<&'static (&'static str, u32, &'static str)> {
    CURRENCIES
        .binary_search_by(|(candidate, _, _)| (*candidate).cmp(code))
        .ok()
        .map(|idx| &CURRENCIES[idx])
}
