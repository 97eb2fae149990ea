//! # prep-config
//!
//! Layered configuration loading for prepdeck using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PREPDECK_*` prefix, `__` as separator)
//! 2. Project-level `.prepdeck/config.toml`
//! 3. User-level `~/.config/prepdeck/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PREPDECK_TAGGER__COMPANY` -> `tagger.company`,
//! `PREPDECK_STORE__SAVED_QUESTIONS_PATH` -> `store.saved_questions_path`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use prep_config::PrepConfig;
//!
//! let config = PrepConfig::load_with_dotenv().expect("config");
//! println!("saved questions live in {}", config.store.saved_questions_path);
//! ```

mod error;
mod store;
mod tagger;

pub use error::ConfigError;
pub use store::StoreConfig;
pub use tagger::TaggerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PrepConfig {
    #[serde(default)]
    pub tagger: TaggerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl PrepConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse and
    /// [`ConfigError::InvalidValue`] when a loaded value is rejected.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".prepdeck/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PREPDECK_").split("__"))
    }

    /// Check loaded values that serde defaults cannot guard.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first rejected field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("prepdeck").join("config.toml"))
    }
}
