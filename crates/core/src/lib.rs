//! Core business logic for TripSync.
//!
//! This crate contains the expense split engine with ZERO web or database
//! dependencies. Every function is pure: value inputs, value outputs, no
//! shared mutable state.
//!
//! # Modules
//!
//! - `currency` - Currency registry, exchange rate parsing, minor-unit conversion
//! - `split` - Equal split among debtors plus payer, with currency-aware reconciliation
//! - `error` - Validation errors shared by both

pub mod currency;
pub mod error;
pub mod split;

pub use error::SplitError;
