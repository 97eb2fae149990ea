//! Saved-question store configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_saved_questions_path() -> String {
    ".prepdeck/saved_questions.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// JSON file holding the saved-question set.
    #[serde(default = "default_saved_questions_path")]
    pub saved_questions_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            saved_questions_path: default_saved_questions_path(),
        }
    }
}

impl StoreConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.saved_questions_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.saved_questions_path".into(),
                reason: "path must not be empty".into(),
            });
        }
        Ok(())
    }
}
