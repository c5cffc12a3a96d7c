//! Shared types, errors, and configuration for TripSync.
//!
//! This crate provides common types used across all other crates:
//! - Integer minor-unit amounts with a strict decimal boundary
//! - Currency codes and debtor identifiers
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
