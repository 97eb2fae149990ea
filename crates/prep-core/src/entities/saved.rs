use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Raw question values the user flagged to survive regeneration.
///
/// Keeps insertion order (the order questions were saved in) and set
/// semantics on the raw value: saving a value twice keeps the first position.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SavedQuestionSet {
    #[serde(default)]
    questions: Vec<String>,
}

impl SavedQuestionSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            questions: Vec::new(),
        }
    }

    /// Add `raw` to the set. Returns `false` if it was already saved.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `raw` is blank.
    pub fn save(&mut self, raw: impl Into<String>) -> Result<bool, CoreError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(CoreError::Validation(
                "saved question must not be blank".into(),
            ));
        }
        if self.contains(&raw) {
            return Ok(false);
        }
        self.questions.push(raw);
        Ok(true)
    }

    /// Remove `raw` from the set. Returns `false` if it was not saved.
    pub fn unsave(&mut self, raw: &str) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| q != raw);
        self.questions.len() != before
    }

    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.questions.iter().any(|q| q == raw)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SavedQuestionSet {
    /// Collect raw values, skipping blanks and duplicates.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        // Blank values are skipped instead of failing the whole collect.
        for raw in iter.into_iter().map(Into::<String>::into) {
            if !raw.trim().is_empty() && !set.contains(&raw) {
                set.questions.push(raw);
            }
        }
        set
    }
}
