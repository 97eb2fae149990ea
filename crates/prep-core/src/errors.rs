//! Cross-cutting error types for prepdeck.
//!
//! Malformed AI output is never an error in this system: the pipeline degrades
//! to empty results instead. The variants here cover contract violations only,
//! such as an unknown tag label or a blank saved-question key.

use thiserror::Error;

/// Errors that can be raised by any prepdeck crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A tag label outside the fixed vocabulary.
    #[error("Unknown question tag: {0}")]
    UnknownTag(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
