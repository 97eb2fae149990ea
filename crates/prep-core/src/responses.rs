//! CLI response types returned as JSON by `prep` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `prep reconcile`, `prep saved add`, and `prep generic`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AnswerCandidate, QuestionEntry};

/// Response from `prep reconcile`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReconcileResponse {
    pub entries: Vec<QuestionEntry>,
    pub total_questions: u32,
    /// Entries that received a suggested approach.
    pub answered: u32,
    /// Entries seeded from the saved-question set.
    pub saved: u32,
}

impl ReconcileResponse {
    #[must_use]
    pub fn from_entries(entries: Vec<QuestionEntry>) -> Self {
        let count = |pred: fn(&QuestionEntry) -> bool| {
            u32::try_from(entries.iter().filter(|e| pred(e)).count()).unwrap_or(u32::MAX)
        };
        let total_questions = count(|_| true);
        let answered = count(|e| e.suggested_approach.is_some());
        let saved = count(|e| e.saved);
        Self {
            entries,
            total_questions,
            answered,
            saved,
        }
    }
}

/// Response from `prep sanitize` and `prep normalize`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TextResponse {
    pub input: String,
    pub output: String,
}

/// Response from `prep split`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SplitResponse {
    pub input: String,
    pub pair: Option<AnswerCandidate>,
}

/// Response from `prep generic`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GenericCheckResponse {
    pub answer: String,
    pub generic: bool,
    pub usable: bool,
}

/// Response from `prep saved list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SavedListResponse {
    pub questions: Vec<String>,
    pub total: u32,
}

/// Response from `prep saved add` and `prep saved remove`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SavedChangeResponse {
    pub question: String,
    /// Whether the set changed.
    pub changed: bool,
    pub total: u32,
}
