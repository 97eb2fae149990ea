//! Error types for strict response parsing.

use thiserror::Error;

/// Why a model response could not be read as a question deck.
///
/// Only [`crate::response::try_parse_generation`] surfaces these.
/// [`crate::response::parse_generation`] degrades to the plain-text fallback instead.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// Neither a fenced block nor a `{...}` / `[...]` span was found.
    #[error("No JSON object or array found in response")]
    NoJson,

    /// JSON still failed to parse after the trailing-comma repair pass.
    #[error("Malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unexpected JSON shape: {0}")]
    UnexpectedShape(String),
}
