//! Errors raised while loading prepdeck configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or env var could not be read into [`crate::PrepConfig`].
    #[error("Failed to load prepdeck configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A loaded value parsed fine but is not usable.
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },
}
