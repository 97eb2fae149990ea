use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A question/answer pair extracted from AI output.
///
/// Both fields are expected to be sanitized before the pair joins an answer
/// pool. Whether the answer is usable (long enough, not generic) is decided by
/// the pipeline, not by this type.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnswerCandidate {
    pub question: String,
    pub answer: String,
}

impl AnswerCandidate {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
