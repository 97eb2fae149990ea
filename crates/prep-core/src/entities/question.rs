use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QuestionTag;

/// One reconciled interview question, ready for rendering or persistence.
///
/// `id` is the position in the list it was produced in, not a durable key.
/// `raw_value` is the unsanitized string as the AI produced it and is the key
/// used by the saved-question set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionEntry {
    pub id: u32,
    pub raw_value: String,
    pub text: String,
    #[serde(default)]
    pub tags: BTreeSet<QuestionTag>,
    /// Matched answer. Absent when no usable answer was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_approach: Option<String>,
    /// Whether the entry was seeded from the saved-question set.
    #[serde(default)]
    pub saved: bool,
}

impl QuestionEntry {
    #[must_use]
    pub fn has_tag(&self, tag: QuestionTag) -> bool {
        self.tags.contains(&tag)
    }
}
