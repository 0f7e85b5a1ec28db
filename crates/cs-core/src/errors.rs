//! Cross-cutting error types for certsync.
//!
//! Loader errors (`IngestError`) and configuration errors (`ConfigError`) are
//! defined in their respective crates.

use thiserror::Error;

/// Errors raised by the reconciliation and classification engine.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record lacks a field the algorithm depends on.
    #[error("Malformed {record} #{index}: missing required field '{field}'")]
    InputShape {
        record: &'static str,
        index: usize,
        field: &'static str,
    },

    /// The expiry threshold is negative or not a number.
    #[error("Invalid threshold: {0} (expected a non-negative number of days)")]
    InvalidThreshold(String),

    /// An expiry string could not be interpreted as a point in time.
    #[error("Unparseable expiry date '{value}' on certificate {serial_number}")]
    InvalidExpiry {
        serial_number: String,
        value: String,
    },
}
