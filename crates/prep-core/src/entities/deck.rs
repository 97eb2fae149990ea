use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AnswerCandidate;

/// The question and answer arrays recovered from one AI response.
///
/// Elements are parsed but still dirty: questions may carry JSON-key
/// prefixes, stray quotes, or a whole `question`/`answer` object flattened into
/// one string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GeneratedDeck {
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub answers: Vec<AnswerCandidate>,
}

impl GeneratedDeck {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty() && self.answers.is_empty()
    }
}
