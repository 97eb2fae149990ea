//! Recovery of question/answer pairs flattened into a single string.
//!
//! When a model serializes a whole `{"question": ..., "answer": ...}` object as
//! one element of the `questions` array, the element reads like
//! `"How do you handle conflict?", "answer": "Give a specific example."`.
//! [`try_split`] cuts such a string at the answer marker and keeps both halves.

use std::sync::LazyLock;

use prep_core::entities::AnswerCandidate;
use regex::Regex;

use crate::sanitize::{SanitizeMode, meets_min_length, sanitize};

/// `, "answer":` with optional quotes and an optional closing quote before the comma.
static ANSWER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)"?\s*,\s*"?answer"?\s*:"#).expect("valid regex"));

/// Split `raw` into a question and its answer.
///
/// Returns `None` when there is no answer marker, or when either half is
/// shorter than [`crate::sanitize::MIN_TEXT_CHARS`] after sanitizing. Callers
/// then treat the whole string as a question.
///
/// # Examples
///
/// ```
/// use prep_pipeline::split::try_split;
///
/// let pair = try_split(r#""How do you handle conflict?", "answer": "Give a specific example using STAR.""#)
///     .expect("pair");
/// assert_eq!(pair.question, "How do you handle conflict?");
/// assert_eq!(pair.answer, "Give a specific example using STAR.");
/// ```
#[must_use]
pub fn try_split(raw: &str) -> Option<AnswerCandidate> {
    let marker = ANSWER_MARKER.find(raw)?;

    let question = sanitize(&raw[..marker.start()], SanitizeMode::Question);
    let answer = sanitize(&raw[marker.end()..], SanitizeMode::Answer);

    if !meets_min_length(&question) || !meets_min_length(&answer) {
        tracing::debug!(
            question_chars = question.chars().count(),
            answer_chars = answer.chars().count(),
            "answer marker found but a half is too short; not splitting"
        );
        return None;
    }

    Some(AnswerCandidate { question, answer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_interleaved_pair() {
        let pair = try_split(
            r#""How do you handle conflict?", "answer": "Give a specific example using STAR.""#,
        );
        assert_eq!(
            pair,
            Some(AnswerCandidate::new(
                "How do you handle conflict?",
                "Give a specific example using STAR."
            ))
        );
    }

    #[test]
    fn short_halves_do_not_split() {
        assert_eq!(try_split(r#""Q", "answer": "A""#), None);
    }

    #[test]
    fn one_short_half_does_not_split() {
        assert_eq!(
            try_split(r#""Why did you leave your last job?", "answer": "Growth""#),
            None
        );
    }

    #[test]
    fn no_marker_is_none() {
        assert_eq!(try_split("What does a great day at work look like?"), None);
    }

    #[test]
    fn splits_whole_object_fragment() {
        let pair = try_split(
            r#"{"question": "What is your biggest achievement?", "answer": "Pick one measurable win and explain your part."}"#,
        )
        .expect("pair");
        assert_eq!(pair.question, "What is your biggest achievement?");
        assert_eq!(pair.answer, "Pick one measurable win and explain your part.");
    }

    #[test]
    fn marker_is_case_insensitive_and_quotes_optional() {
        let pair =
            try_split("Describe your ideal team culture, ANSWER: Talk about trust and autonomy")
                .expect("pair");
        assert_eq!(pair.question, "Describe your ideal team culture");
        assert_eq!(pair.answer, "Talk about trust and autonomy");
    }

    #[test]
    fn answer_tail_with_next_question_is_cut() {
        let pair = try_split(
            r#""How do you onboard onto a new codebase?", "answer": "Read the tests first, then trace one request.", "question": "Next?""#,
        )
        .expect("pair");
        assert_eq!(pair.answer, "Read the tests first, then trace one request.");
    }
}
