//! Removal of JSON and quoting artifacts from AI-generated fragments.
//!
//! LLM responses that were meant to be `{"questions": [...], "answers": [...]}`
//! often reach us as half-parsed strings: a leading `"question":` key, a
//! trailing `, "answer": ...` tail, stray quotes, a dangling `[` or `}`. The
//! sanitizer peels those off with a fixed, ordered list of rewrites:
//!
//! 1. leading `"question":` / `"questions":` / `"answer":` key
//! 2. trailing `, "answer": ...` / `, "question": ...` fragment
//! 3. trailing `",`, trailing `,`, trailing `}` / `]` (optionally followed by `,`)
//! 4. leading and trailing quote characters
//! 5. unbalanced leading `[` / `{`, unbalanced trailing `]` and dangling openers
//! 6. unmatched leading `(` or trailing `)`
//! 7. surrounding whitespace
//!
//! Reasoning-trace blocks (`<think>…</think>`) and stray think tags are
//! dropped at the start of every pass, before step 1.
//!
//! Every rewrite only removes characters, so the pass is repeated until the
//! text stops changing. The result is a fixpoint, which makes
//! `sanitize(sanitize(s)) == sanitize(s)` hold for every input.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Minimum number of characters for a usable question or answer.
pub const MIN_TEXT_CHARS: usize = 10;

/// Which kind of fragment is being cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SanitizeMode {
    Question,
    Answer,
}

impl SanitizeMode {
    /// Bare tokens that are JSON keys leaking through, not content.
    const fn artifact_tokens(self) -> &'static [&'static str] {
        match self {
            Self::Question => &["question", "questions"],
            Self::Answer => &["answer"],
        }
    }
}

static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<think>.*?</think>").expect("valid regex"));

static THINK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?think>").expect("valid regex"));

static LEADING_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^\s*"?(?:questions?|answer)"?\s*:\s*"#).expect("valid regex")
});

static TRAILING_PAIR_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)"?\s*,\s*"?(?:answer|questions?)"?\s*:.*$"#).expect("valid regex")
});

static TRAILING_QUOTE_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["\u{201C}\u{201D}]\s*,\s*$"#).expect("valid regex"));

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*$").expect("valid regex"));

static TRAILING_CLOSER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[}\]]\s*,?\s*$").expect("valid regex"));

static LEADING_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*["\u{201C}\u{201D}\u{201E}`]+"#).expect("valid regex"));

static TRAILING_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["\u{201C}\u{201D}`]+\s*$"#).expect("valid regex"));

/// Clean one AI-generated fragment.
///
/// Never fails. Fully-artifact input comes back as an empty string and the
/// caller decides whether to discard it.
///
/// # Examples
///
/// ```
/// use prep_pipeline::sanitize::{sanitize, SanitizeMode};
///
/// let text = sanitize(r#""question": "Why do you want this role?","#, SanitizeMode::Question);
/// assert_eq!(text, "Why do you want this role?");
/// ```
#[must_use]
pub fn sanitize(raw: &str, mode: SanitizeMode) -> String {
    let mut current = raw.to_string();
    loop {
        let next = sanitize_pass(&current, mode);
        if next == current {
            return next;
        }
        current = next;
    }
}

/// Shorthand for [`sanitize`] in question mode.
#[must_use]
pub fn sanitize_question(raw: &str) -> String {
    sanitize(raw, SanitizeMode::Question)
}

/// Shorthand for [`sanitize`] in answer mode.
#[must_use]
pub fn sanitize_answer(raw: &str) -> String {
    sanitize(raw, SanitizeMode::Answer)
}

/// Drop `<think>…</think>` blocks and any stray think tags.
#[must_use]
pub fn strip_reasoning_trace(text: &str) -> Cow<'_, str> {
    if !THINK_TAG.is_match(text) {
        return Cow::Borrowed(text);
    }
    let without_blocks = THINK_BLOCK.replace_all(text, "");
    Cow::Owned(THINK_TAG.replace_all(&without_blocks, "").into_owned())
}

/// Character count of `text` after trimming.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// Whether `text` is long enough to keep as a question or answer.
#[must_use]
pub fn meets_min_length(text: &str) -> bool {
    char_len(text) >= MIN_TEXT_CHARS
}

/// Whether `text` is nothing but a leaked JSON key (`question`, `questions`, `answer`).
#[must_use]
pub fn is_artifact_token(text: &str) -> bool {
    let trimmed = text.trim();
    SanitizeMode::Question
        .artifact_tokens()
        .iter()
        .chain(SanitizeMode::Answer.artifact_tokens())
        .any(|token| trimmed.eq_ignore_ascii_case(token))
}

fn sanitize_pass(text: &str, mode: SanitizeMode) -> String {
    // Removing one tag can splice its neighbours into another.
    let text = strip_reasoning_trace(text);

    // 1 + 2
    let text = LEADING_KEY.replace(&text, "");
    let text = TRAILING_PAIR_FRAGMENT.replace(&text, "");

    // 3
    let text = TRAILING_QUOTE_COMMA.replace(&text, "");
    let text = TRAILING_COMMA.replace(&text, "");
    let text = TRAILING_CLOSER.replace(&text, "");

    // 4
    let text = LEADING_QUOTES.replace(&text, "");
    let text = TRAILING_QUOTES.replace(&text, "");

    // 5 + 6
    let text = strip_unbalanced_brackets(text.trim());
    let text = strip_unmatched_parens(text);

    // 7
    let text = text.trim();

    if mode
        .artifact_tokens()
        .iter()
        .any(|token| text.eq_ignore_ascii_case(token))
    {
        return String::new();
    }
    text.to_string()
}

/// Drop a leading `[`/`{` with no closer after it, and a trailing `]` with no
/// opener before it. A trailing opener (`[`, `{`, `(`) can never be balanced.
fn strip_unbalanced_brackets(text: &str) -> &str {
    let mut text = text;

    for (open, close) in [('[', ']'), ('{', '}')] {
        if let Some(rest) = text.strip_prefix(open) {
            if !rest.contains(close) {
                text = rest.trim_start();
            }
        }
    }

    if let Some(rest) = text.strip_suffix(']') {
        if !rest.contains('[') {
            text = rest.trim_end();
        }
    }

    if let Some(rest) = text.strip_suffix(['[', '{', '(']) {
        text = rest.trim_end();
    }

    text
}

/// Drop a single unmatched leading `(` or trailing `)`, keeping the content.
fn strip_unmatched_parens(text: &str) -> &str {
    let mut text = text;

    if let Some(rest) = text.strip_prefix('(') {
        if !rest.contains(')') {
            text = rest.trim_start();
        }
    }

    if let Some(rest) = text.strip_suffix(')') {
        if !rest.contains('(') {
            text = rest.trim_end();
        }
    }

    text
}
