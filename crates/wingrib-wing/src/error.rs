//! Error types for the wing crate.
//!
//! Only spec validation and spec (de)serialization can fail. Geometric
//! degeneracies during generation are handled locally and never surface here.

use thiserror::Error;

/// Errors that can occur while generating a wing.
#[derive(Error, Debug)]
pub enum WingError {
    /// The spec failed validation.
    #[error("Invalid wing spec: {0}")]
    InvalidSpec(#[from] ParameterError),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Errors related to wing spec validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// The spec was authored for a different schema version.
    #[error("Unsupported spec version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// A value that must be strictly positive is not.
    #[error("Parameter '{name}' must be > 0 (got {value})")]
    NotPositive { name: String, value: f64 },

    /// A value that must be zero or more is negative.
    #[error("Parameter '{name}' must be >= 0 (got {value})")]
    Negative { name: String, value: f64 },

    /// A count is below its minimum.
    #[error("Parameter '{name}' must be >= {min} (got {value})")]
    TooFew { name: String, value: u32, min: u32 },

    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Result type alias for wing operations.
pub type WingResult<T> = Result<T, WingError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
