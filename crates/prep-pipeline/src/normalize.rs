//! Matching keys for questions.
//!
//! The normalized form is never shown to users. It is lossy on purpose: case,
//! punctuation, quoting, and whitespace runs do not survive, so `"Don't"` and
//! `"dont"` produce the same key.

use std::sync::LazyLock;

use regex::Regex;

static QUESTION_KEY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*"?questions?"?\s*:\s*"#).expect("valid regex"));

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Canonical, case- and punctuation-insensitive key for `s`.
///
/// # Examples
///
/// ```
/// use prep_pipeline::normalize::normalize;
///
/// assert_eq!(
///     normalize(r#""Question": "Tell me about a time you failed?""#),
///     normalize("tell me about a time you failed"),
/// );
/// ```
#[must_use]
pub fn normalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let without_key = QUESTION_KEY_PREFIX.replace(&lower, "");
    let unquoted = without_key
        .trim()
        .trim_matches(|c| matches!(c, '"' | '\'' | '\u{201C}' | '\u{201D}'));
    let words_only = NON_WORD.replace_all(unquoted, "");
    WHITESPACE_RUN
        .replace_all(&words_only, " ")
        .trim()
        .to_string()
}
