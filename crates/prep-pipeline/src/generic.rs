//! Rejection of templated, low-information answers.
//!
//! Short boilerplate that only says "use the STAR method" is useless coaching.
//! Longer answers that mention STAR while giving concrete guidance are kept.
//! The length gates differ per phrase and are fixed.

use crate::sanitize::{char_len, meets_min_length};

const STAR_STRUCTURE_PHRASE: &str = "structure your answer using the star method";
const STAR_STRUCTURE_MAX_CHARS: usize = 100;

const PREPARE_SPECIFIC_PHRASE: &str = "prepare a specific answer for this question";
const PREPARE_SPECIFIC_MAX_CHARS: usize = 150;

const BARE_STAR_ANSWERS: [&str; 2] = ["use the star method", "use star method"];

const STAR_METHOD_PHRASE: &str = "star method";
const SHORT_STAR_MAX_CHARS: usize = 30;

/// Whether `answer` is too generic to show as a suggested approach.
///
/// Matching is case-insensitive and whitespace runs count as one space.
/// Length is the character count of the trimmed answer.
#[must_use]
pub fn is_generic(answer: &str) -> bool {
    let len = char_len(answer);
    let folded = answer
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    (folded.contains(STAR_STRUCTURE_PHRASE) && len < STAR_STRUCTURE_MAX_CHARS)
        || BARE_STAR_ANSWERS.contains(&folded.as_str())
        || (folded.contains(PREPARE_SPECIFIC_PHRASE) && len < PREPARE_SPECIFIC_MAX_CHARS)
        || (len < SHORT_STAR_MAX_CHARS && folded.contains(STAR_METHOD_PHRASE))
}

/// Whether `answer` may be handed out by the matcher: long enough and not generic.
#[must_use]
pub fn is_usable_answer(answer: &str) -> bool {
    meets_min_length(answer) && !is_generic(answer)
}
