//! Shared utilities for the contact normalization crates.
//!
//! This crate provides the cell-to-text coercion every pass relies on and
//! the switch that keeps row values out of logs.

pub mod polars;
pub mod redact;

pub use polars::{any_to_string, any_to_token, digits_only, format_numeric};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data};
