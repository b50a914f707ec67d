//! Error handling for wingrib core
//!
//! Geometry in this crate never fails: degenerate inputs fall back to a
//! best-effort value instead. The only fallible edge left is parsing unit
//! names.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// An unknown unit name was supplied
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
