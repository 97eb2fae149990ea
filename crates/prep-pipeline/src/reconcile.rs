//! Merge saved questions with a freshly generated deck.
//!
//! Output order is: saved questions in saved order, then fresh questions in
//! generation order, skipping fresh questions whose normalized form is
//! already present. Each entry then gets an answer from one shared
//! [`AnswerMatcher`] pool laid out as
//!
//! ```text
//! [ prior answers for saved | fresh answers | answers recovered by the splitter ]
//! ```
//!
//! Saved questions search the whole pool; fresh questions only search from the
//! fresh answers onwards. Direct matches (positional, exact, fuzzy) are
//! resolved for every question before any fallback is handed out, so a
//! fallback never steals an answer that another question matches directly.

use std::collections::HashSet;
use std::ops::Range;

use prep_core::entities::{AnswerCandidate, GeneratedDeck, QuestionEntry, SavedQuestionSet};

use crate::matcher::AnswerMatcher;
use crate::normalize::normalize;
use crate::sanitize::{is_artifact_token, meets_min_length, sanitize_answer, sanitize_question};
use crate::split::try_split;
use crate::tagger::{KeywordTagger, QuestionTagger};

/// The four lists a reconciliation run consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileInput {
    /// Raw values from the saved-question set, in saved order.
    pub saved_raw: Vec<String>,
    /// Raw question strings from the new generation.
    pub fresh_questions: Vec<String>,
    /// Answer candidates from the new generation.
    pub fresh_answers: Vec<AnswerCandidate>,
    /// Answers kept from earlier runs, aligned with `saved_raw`.
    pub prior_answers_for_saved: Vec<AnswerCandidate>,
}

impl ReconcileInput {
    #[must_use]
    pub fn from_deck(
        saved: &SavedQuestionSet,
        deck: GeneratedDeck,
        prior_answers_for_saved: Vec<AnswerCandidate>,
    ) -> Self {
        Self {
            saved_raw: saved.as_slice().to_vec(),
            fresh_questions: deck.questions,
            fresh_answers: deck.answers,
            prior_answers_for_saved,
        }
    }
}

/// Runs reconciliation with a pluggable tagger.
#[derive(Debug, Clone, Default)]
pub struct Reconciler<T = KeywordTagger> {
    tagger: T,
}

/// A question that made it into the output, before answer resolution.
struct Pending {
    raw_value: String,
    text: String,
    saved: bool,
    positional: Option<usize>,
    scope: Scope,
}

#[derive(Clone, Copy)]
enum Scope {
    WholePool,
    FromFresh,
}

impl<T: QuestionTagger> Reconciler<T> {
    #[must_use]
    pub const fn new(tagger: T) -> Self {
        Self { tagger }
    }

    #[must_use]
    pub const fn tagger(&self) -> &T {
        &self.tagger
    }

    /// Produce the ordered question list for one run.
    ///
    /// Pure and deterministic: identical input yields identical output.
    #[must_use]
    pub fn reconcile(&self, input: &ReconcileInput) -> Vec<QuestionEntry> {
        let prior = clean_candidates(&input.prior_answers_for_saved);
        let fresh = clean_candidates(&input.fresh_answers);
        let mut recovered = Vec::new();

        let mut pending = Vec::new();
        let mut seen_raw = HashSet::new();
        let mut seen_keys = HashSet::new();

        for (index, raw) in input.saved_raw.iter().enumerate() {
            if !seen_raw.insert(raw.as_str()) {
                tracing::debug!(raw = %raw, "duplicate saved question collapsed");
                continue;
            }
            let text = display_text(raw, &mut recovered);
            if !is_displayable(&text) {
                tracing::debug!(raw = %raw, "saved question too short after sanitizing; dropped");
                continue;
            }
            seen_keys.insert(normalize(&text));
            pending.push(Pending {
                raw_value: raw.clone(),
                text,
                saved: true,
                positional: (index < prior.len()).then_some(index),
                scope: Scope::WholePool,
            });
        }

        for (index, raw) in input.fresh_questions.iter().enumerate() {
            let text = display_text(raw, &mut recovered);
            if !is_displayable(&text) {
                tracing::debug!(raw = %raw, "fresh question too short after sanitizing; dropped");
                continue;
            }
            if !seen_keys.insert(normalize(&text)) {
                tracing::debug!(text = %text, "fresh question duplicates an earlier one; skipped");
                continue;
            }
            pending.push(Pending {
                raw_value: raw.clone(),
                text,
                saved: false,
                positional: (index < fresh.len()).then_some(prior.len() + index),
                scope: Scope::FromFresh,
            });
        }

        let prior_len = prior.len();
        let pool: Vec<AnswerCandidate> = prior.into_iter().chain(fresh).chain(recovered).collect();
        let scope_range = |scope: Scope| -> Range<usize> {
            match scope {
                Scope::WholePool => 0..pool.len(),
                Scope::FromFresh => prior_len..pool.len(),
            }
        };

        let mut matcher = AnswerMatcher::new(&pool);
        let mut answers: Vec<Option<String>> = pending
            .iter()
            .map(|p| {
                matcher
                    .resolve_direct(&p.text, scope_range(p.scope), p.positional)
                    .map(|r| r.answer)
            })
            .collect();
        for (slot, p) in answers.iter_mut().zip(&pending) {
            if slot.is_none() {
                *slot = matcher.take_fallback(scope_range(p.scope)).map(|r| r.answer);
            }
        }

        tracing::debug!(
            questions = pending.len(),
            answered = answers.iter().filter(|a| a.is_some()).count(),
            pool = pool.len(),
            "reconciled"
        );

        pending
            .into_iter()
            .zip(answers)
            .enumerate()
            .map(|(position, (p, suggested_approach))| QuestionEntry {
                id: u32::try_from(position).unwrap_or(u32::MAX),
                tags: self.tagger.tag(&p.text),
                raw_value: p.raw_value,
                text: p.text,
                suggested_approach,
                saved: p.saved,
            })
            .collect()
    }
}

/// Reconcile with the default [`KeywordTagger`].
#[must_use]
pub fn reconcile(
    saved_raw: &[String],
    fresh_questions: &[String],
    fresh_answers: &[AnswerCandidate],
    prior_answers_for_saved: &[AnswerCandidate],
) -> Vec<QuestionEntry> {
    let input = ReconcileInput {
        saved_raw: saved_raw.to_vec(),
        fresh_questions: fresh_questions.to_vec(),
        fresh_answers: fresh_answers.to_vec(),
        prior_answers_for_saved: prior_answers_for_saved.to_vec(),
    };
    Reconciler::<KeywordTagger>::default().reconcile(&input)
}

/// Splitter first, question sanitizer otherwise. A recovered pair's answer is
/// pushed onto `recovered`.
fn display_text(raw: &str, recovered: &mut Vec<AnswerCandidate>) -> String {
    match try_split(raw) {
        Some(pair) => {
            let text = pair.question.clone();
            recovered.push(pair);
            text
        }
        None => sanitize_question(raw),
    }
}

fn is_displayable(text: &str) -> bool {
    meets_min_length(text) && !is_artifact_token(text)
}

fn clean_candidates(candidates: &[AnswerCandidate]) -> Vec<AnswerCandidate> {
    candidates
        .iter()
        .map(|c| AnswerCandidate {
            question: sanitize_question(&c.question),
            answer: sanitize_answer(&c.answer),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use prep_core::enums::QuestionTag;
    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn texts(entries: &[QuestionEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn saved_duplicate_is_not_re_added() {
        let entries = reconcile(
            &strings(&["Tell me about yourself?"]),
            &strings(&["What is your greatest weakness?", "tell me about yourself?"]),
            &[],
            &[],
        );
        assert_eq!(
            texts(&entries),
            ["Tell me about yourself?", "What is your greatest weakness?"]
        );
        assert!(entries[0].saved);
        assert!(!entries[1].saved);
        assert_eq!(entries[1].id, 1);
    }

    #[test]
    fn fresh_positional_index_is_offset_past_prior_answers() {
        let prior = [AnswerCandidate::new(
            "Tell me about yourself?",
            "Lead with your current role and one recent win.",
        )];
        let fresh_answers = [AnswerCandidate::new(
            "Something worded differently",
            "Pick a weakness you already work on and show progress.",
        )];
        let entries = reconcile(
            &strings(&["Tell me about yourself?"]),
            &strings(&["What is your greatest weakness?"]),
            &fresh_answers,
            &prior,
        );
        assert_eq!(
            entries[0].suggested_approach.as_deref(),
            Some("Lead with your current role and one recent win.")
        );
        assert_eq!(
            entries[1].suggested_approach.as_deref(),
            Some("Pick a weakness you already work on and show progress.")
        );
    }

    #[test]
    fn fresh_questions_never_take_prior_answers() {
        let prior = [AnswerCandidate::new(
            "What is your greatest weakness?",
            "An answer written for an earlier run of the deck.",
        )];
        let entries = reconcile(&[], &strings(&["What is your greatest weakness?"]), &[], &prior);
        assert_eq!(entries[0].suggested_approach, None);
    }

    #[test]
    fn direct_matches_win_over_fallback_order() {
        // The only usable answer comes from a split pair. The first question
        // has no direct match and must not take it through fallback before the
        // second question claims it by exact match.
        let entries = reconcile(
            &[],
            &strings(&[
                "Describe your ideal working environment here?",
                r#""Why are you leaving your job?", "answer": "Stay positive and point to growth you want.""#,
            ]),
            &[],
            &[],
        );
        assert_eq!(
            texts(&entries),
            [
                "Describe your ideal working environment here?",
                "Why are you leaving your job?"
            ]
        );
        assert_eq!(entries[0].suggested_approach, None);
        assert_eq!(
            entries[1].suggested_approach.as_deref(),
            Some("Stay positive and point to growth you want.")
        );
    }

    #[test]
    fn custom_tagger_is_used() {
        let tagger = |_: &str| -> BTreeSet<QuestionTag> { [QuestionTag::RoleSpecific].into() };
        let reconciler = Reconciler::new(tagger);
        let input = ReconcileInput {
            fresh_questions: strings(&["Where do you see yourself in five years?"]),
            ..ReconcileInput::default()
        };
        let entries = reconciler.reconcile(&input);
        assert!(entries[0].has_tag(QuestionTag::RoleSpecific));
    }
}
