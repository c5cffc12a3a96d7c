//! Multi-currency handling: metadata, exchange rates, and conversion.

pub mod conversion;
pub mod display;
pub mod exchange;
pub mod registry;

#[cfg(test)]
pub(crate) mod props;

pub use conversion::{convert_minor, convert_minor_units};
pub use display::{format_minor, major_to_minor};
pub use exchange::{FxRate, RATE_SCALE, RATE_SCALE_DIGITS};
pub use registry::{CurrencyMeta, DEFAULT_EXPONENT, currency_meta, is_known_currency};
