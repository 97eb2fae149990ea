//! Turning a raw model response into a [`GeneratedDeck`].
//!
//! The model is asked for `{"questions": [...], "answers": [{"question", "answer"}]}`
//! but answers arrive wrapped in prose, fenced blocks, reasoning traces, with
//! trailing commas, or as a numbered list with no JSON at all. Escalation:
//!
//! 1. extract the JSON-looking span and parse it
//! 2. on failure, remove trailing commas and parse again
//! 3. on failure, read question lines from the plain text
//!
//! Element strings are passed through dirty. Cleaning them is the
//! reconciler's job.

use std::sync::LazyLock;

use prep_core::entities::{AnswerCandidate, GeneratedDeck};
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::ResponseError;
use crate::sanitize::strip_reasoning_trace;
use crate::split::try_split;

static TRAILING_COMMA_BEFORE_CLOSER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[}\]])").expect("valid regex"));

/// `1.`, `1)`, `-`, `*`, `•`, `Q1:` and similar list prefixes.
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:\d+\s*[.)]|[-*•]|q\d+\s*[:.)])\s*").expect("valid regex")
});

/// Extract the JSON-looking part of `text`.
///
/// Prefers a fenced code block (```` ```json ```` or bare ```` ``` ````), then a
/// bracket span: `{` to the last `}` or `[` to the last `]`, whichever opener
/// comes first in the text.
#[must_use]
pub fn extract_json_block(text: &str) -> Option<&str> {
    json_candidates(text).into_iter().next()
}

/// Every span [`extract_json_block`] would consider, best first.
fn json_candidates(text: &str) -> Vec<&str> {
    if let Some(start) = text.find("```") {
        let after_fence = &text[start + 3..];
        let content_start = after_fence.find('\n').map_or(0, |nl| nl + 1);
        let content = &after_fence[content_start..];
        if let Some(end) = content.find("```") {
            let block = content[..end].trim();
            if !block.is_empty() {
                return vec![block];
            }
        }
    }

    let mut spans: Vec<(usize, &str)> = [('{', '}'), ('[', ']')]
        .into_iter()
        .filter_map(|(open, close)| {
            let start = text.find(open)?;
            let end = text.rfind(close)?;
            (start < end).then(|| (start, &text[start..=end]))
        })
        .collect();
    spans.sort_by_key(|&(start, _)| start);
    spans.into_iter().map(|(_, span)| span).collect()
}

/// Remove commas that directly precede a `}` or `]`.
#[must_use]
pub fn repair_trailing_commas(json: &str) -> String {
    TRAILING_COMMA_BEFORE_CLOSER
        .replace_all(json, "$1")
        .into_owned()
}

/// Parse `raw` strictly as JSON, with one repair pass.
///
/// # Errors
///
/// Returns [`ResponseError::NoJson`] when nothing JSON-like is present,
/// [`ResponseError::Malformed`] when parsing still fails after repair, and
/// [`ResponseError::UnexpectedShape`] when the JSON is neither an object with
/// `questions`/`answers` nor an array.
pub fn try_parse_generation(raw: &str) -> Result<GeneratedDeck, ResponseError> {
    let text = strip_reasoning_trace(raw);
    let mut first_error = None;

    for block in json_candidates(&text) {
        match parse_block(block) {
            Ok(value) => return deck_from_value(value),
            Err(error) => {
                tracing::debug!(%error, "candidate JSON span failed to parse");
                first_error.get_or_insert(error);
            }
        }
    }

    Err(first_error.map_or(ResponseError::NoJson, ResponseError::Malformed))
}

fn parse_block(block: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<Value>(block).or_else(|first| {
        tracing::debug!(error = %first, "response JSON failed to parse; repairing");
        serde_json::from_str::<Value>(&repair_trailing_commas(block))
    })
}

/// Parse `raw` into a deck, never failing.
///
/// Falls back to plain-text question lines when no JSON can be read, and to an
/// empty deck when nothing at all can be recovered.
#[must_use]
pub fn parse_generation(raw: &str) -> GeneratedDeck {
    match try_parse_generation(raw) {
        Ok(deck) if !deck.is_empty() => return deck,
        Ok(_) => tracing::debug!("response JSON held no questions; trying plain text"),
        Err(error) => tracing::debug!(%error, "response is not usable JSON; trying plain text"),
    }

    let deck = GeneratedDeck {
        questions: plain_text_questions(&strip_reasoning_trace(raw)),
        answers: Vec::new(),
    };
    if deck.is_empty() {
        tracing::warn!("no questions could be recovered from the response");
    }
    deck
}

/// Lines that read like questions once list markers are removed.
#[must_use]
pub fn plain_text_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| LIST_MARKER.replace(line, ""))
        .map(|line| line.trim().to_string())
        .filter(|line| line.ends_with('?'))
        .collect()
}

fn deck_from_value(value: Value) -> Result<GeneratedDeck, ResponseError> {
    let mut deck = GeneratedDeck::default();
    match value {
        Value::Array(items) => read_questions(items, &mut deck),
        Value::Object(mut map) => {
            let questions = map.remove("questions");
            let answers = map.remove("answers");
            if questions.is_none() && answers.is_none() {
                return Err(ResponseError::UnexpectedShape(
                    "object has neither `questions` nor `answers`".into(),
                ));
            }
            if let Some(Value::Array(items)) = questions {
                read_questions(items, &mut deck);
            }
            if let Some(Value::Array(items)) = answers {
                read_answers(items, &mut deck);
            }
        }
        other => {
            return Err(ResponseError::UnexpectedShape(format!(
                "expected object or array, found {}",
                json_kind(&other)
            )));
        }
    }
    Ok(deck)
}

fn read_questions(items: Vec<Value>, deck: &mut GeneratedDeck) {
    for item in items {
        match item {
            Value::String(question) => deck.questions.push(question),
            Value::Object(map) => {
                let Some(question) = string_field(&map, "question") else {
                    tracing::debug!("question object without a `question` field skipped");
                    continue;
                };
                if let Some(answer) = string_field(&map, "answer") {
                    deck.answers
                        .push(AnswerCandidate::new(question.clone(), answer));
                }
                deck.questions.push(question);
            }
            other => tracing::debug!(kind = json_kind(&other), "non-string question skipped"),
        }
    }
}

fn read_answers(items: Vec<Value>, deck: &mut GeneratedDeck) {
    for item in items {
        match item {
            Value::Object(map) => {
                if let (Some(question), Some(answer)) =
                    (string_field(&map, "question"), string_field(&map, "answer"))
                {
                    deck.answers.push(AnswerCandidate::new(question, answer));
                }
            }
            Value::String(flat) => {
                if let Some(pair) = try_split(&flat) {
                    deck.answers.push(pair);
                }
            }
            other => tracing::debug!(kind = json_kind(&other), "unreadable answer skipped"),
        }
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
