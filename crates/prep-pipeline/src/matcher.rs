//! Answer resolution for a question against a pool of candidates.
//!
//! Priority chain, first success wins:
//!
//! 1. **Positional**: the candidate at the question's index in its originating list.
//! 2. **Exact**: first candidate whose normalized question equals the target's.
//! 3. **Fuzzy**: first candidate whose normalized question has a length ratio
//!    above [`FUZZY_MIN_SIMILARITY`] and contains (or is contained in) the target.
//! 4. **Fallback**: first candidate nobody has used yet.
//!
//! Unusable candidates (short or generic answers, see [`crate::generic`]) never
//! win any rule. Rules 2 and 3 keep pool order as the only tie-break.

use std::ops::Range;

use prep_core::entities::AnswerCandidate;

use crate::generic::is_usable_answer;
use crate::normalize::normalize;

/// Length ratio a fuzzy match must exceed.
pub const FUZZY_MIN_SIMILARITY: f64 = 0.6;

/// Which rule of the priority chain produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRule {
    Positional,
    Exact,
    Fuzzy,
    Fallback,
}

impl MatchRule {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
            Self::Fallback => "fallback",
        }
    }
}

/// An answer picked from the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAnswer {
    pub answer: String,
    pub rule: MatchRule,
    /// Index of the winning candidate in the pool.
    pub pool_index: usize,
}

#[derive(Debug, Clone)]
struct PoolEntry {
    key: String,
    answer: String,
    usable: bool,
    used: bool,
}

/// Length ratio `min / max` of two strings, in characters.
///
/// Two empty strings are identical (1.0); one empty string against a non-empty
/// one scores 0.0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    let longest = len_a.max(len_b);
    if longest == 0 {
        return 1.0;
    }
    len_a.min(len_b) as f64 / longest as f64
}

/// Stateful matcher over one answer pool.
///
/// Remembers which candidates were handed out, so the fallback rule only ever
/// returns a candidate no other question received.
#[derive(Debug, Clone)]
pub struct AnswerMatcher {
    entries: Vec<PoolEntry>,
}

impl AnswerMatcher {
    #[must_use]
    pub fn new(pool: &[AnswerCandidate]) -> Self {
        let entries = pool
            .iter()
            .map(|candidate| PoolEntry {
                key: normalize(&candidate.question),
                answer: candidate.answer.clone(),
                usable: is_usable_answer(&candidate.answer),
                used: false,
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run the full chain for `question` over the whole pool.
    ///
    /// `index` is the question's position in its originating list.
    pub fn resolve(&mut self, question: &str, index: Option<usize>) -> Option<ResolvedAnswer> {
        self.resolve_within(question, 0..self.entries.len(), index)
    }

    /// Run the full chain restricted to the pool slice `scope`.
    ///
    /// `positional` is an absolute pool index; it is ignored when outside `scope`.
    pub fn resolve_within(
        &mut self,
        question: &str,
        scope: Range<usize>,
        positional: Option<usize>,
    ) -> Option<ResolvedAnswer> {
        self.resolve_direct(question, scope.clone(), positional)
            .or_else(|| self.take_fallback(scope))
    }

    /// Rules 1 to 3 only. The winner is marked as used.
    pub fn resolve_direct(
        &mut self,
        question: &str,
        scope: Range<usize>,
        positional: Option<usize>,
    ) -> Option<ResolvedAnswer> {
        let scope = self.clamp(scope);

        if let Some(index) = positional.filter(|i| scope.contains(i)) {
            if self.entries[index].usable {
                return Some(self.claim(index, MatchRule::Positional));
            }
        }

        let target = normalize(question);
        if target.is_empty() {
            return None;
        }

        let exact = scope.clone().find(|&i| {
            let entry = &self.entries[i];
            entry.usable && entry.key == target
        });
        if let Some(index) = exact {
            return Some(self.claim(index, MatchRule::Exact));
        }

        let fuzzy = scope.clone().find(|&i| {
            let entry = &self.entries[i];
            entry.usable
                && !entry.key.is_empty()
                && similarity(&entry.key, &target) > FUZZY_MIN_SIMILARITY
                && (entry.key.contains(&target) || target.contains(&entry.key))
        });
        fuzzy.map(|index| self.claim(index, MatchRule::Fuzzy))
    }

    /// Rule 4: the first usable, unused candidate in `scope`.
    pub fn take_fallback(&mut self, scope: Range<usize>) -> Option<ResolvedAnswer> {
        let scope = self.clamp(scope);
        let index = scope.clone().find(|&i| {
            let entry = &self.entries[i];
            entry.usable && !entry.used
        })?;
        Some(self.claim(index, MatchRule::Fallback))
    }

    fn clamp(&self, scope: Range<usize>) -> Range<usize> {
        let end = scope.end.min(self.entries.len());
        scope.start.min(end)..end
    }

    fn claim(&mut self, index: usize, rule: MatchRule) -> ResolvedAnswer {
        let entry = &mut self.entries[index];
        entry.used = true;
        tracing::debug!(pool_index = index, rule = rule.as_str(), "resolved answer");
        ResolvedAnswer {
            answer: entry.answer.clone(),
            rule,
            pool_index: index,
        }
    }
}

/// Resolve an answer for the question at `index` of its list against `pool`.
///
/// Convenience wrapper over a fresh [`AnswerMatcher`]. Returns `None` when no
/// usable candidate exists.
#[must_use]
pub fn resolve(question: &str, index: usize, pool: &[AnswerCandidate]) -> Option<String> {
    AnswerMatcher::new(pool)
        .resolve(question, Some(index))
        .map(|resolved| resolved.answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pool(pairs: &[(&str, &str)]) -> Vec<AnswerCandidate> {
        pairs
            .iter()
            .map(|(q, a)| AnswerCandidate::new(*q, *a))
            .collect()
    }

    #[test]
    fn positional_beats_better_textual_match() {
        let pool = pool(&[
            ("Why this company?", "Connect their mission to a project you shipped."),
            (
                "What is your greatest weakness?",
                "Name a real weakness and the habit that fixed it.",
            ),
        ]);
        let mut matcher = AnswerMatcher::new(&pool);
        let resolved = matcher
            .resolve("What is your greatest weakness?", Some(0))
            .expect("answer");
        assert_eq!(resolved.rule, MatchRule::Positional);
        assert_eq!(resolved.answer, "Connect their mission to a project you shipped.");
    }

    #[test]
    fn generic_positional_falls_through_to_exact() {
        let pool = pool(&[
            ("Why this company?", "Use the STAR method"),
            (
                "What is your greatest weakness?",
                "Name a real weakness and the habit that fixed it.",
            ),
        ]);
        let resolved = AnswerMatcher::new(&pool)
            .resolve("what is your greatest WEAKNESS", Some(0))
            .expect("answer");
        assert_eq!(resolved.rule, MatchRule::Exact);
        assert_eq!(resolved.pool_index, 1);
    }

    #[test]
    fn exact_takes_first_in_pool_order() {
        let pool = pool(&[
            ("Tell me about yourself", "First version of the pitch, two minutes."),
            ("tell me about yourself?", "Second version of the pitch, one minute."),
        ]);
        let resolved = AnswerMatcher::new(&pool)
            .resolve("Tell me about yourself?", None)
            .expect("answer");
        assert_eq!(resolved.rule, MatchRule::Exact);
        assert_eq!(resolved.pool_index, 0);
    }

    #[test]
    fn fuzzy_requires_containment_and_ratio() {
        let pool = pool(&[
            (
                "How do you handle tight deadlines at work?",
                "Explain how you cut scope and told stakeholders early.",
            ),
            (
                "How do you handle tight deadlines",
                "Describe the triage you run when time is short.",
            ),
        ]);
        // Target "how do you handle tight deadlines at work" (41 chars) vs
        // entry 1 "how do you handle tight deadlines" (33 chars): ratio 0.80.
        let resolved = AnswerMatcher::new(&pool[1..])
            .resolve("How do you handle tight deadlines at work?", None)
            .expect("answer");
        assert_eq!(resolved.rule, MatchRule::Fuzzy);
        assert_eq!(resolved.answer, "Describe the triage you run when time is short.");
    }

    #[test]
    fn fuzzy_rejects_low_ratio_containment() {
        let pool = pool(&[("deadlines", "Describe the triage you run when time is short.")]);
        let mut matcher = AnswerMatcher::new(&pool);
        let direct = matcher.resolve_direct("How do you handle tight deadlines at work?", 0..1, None);
        assert_eq!(direct, None);
    }

    #[test]
    fn fallback_hands_out_each_candidate_once() {
        let pool = pool(&[
            ("Unrelated question one", "A concrete answer about testing strategy."),
            ("Unrelated question two", "A concrete answer about code review."),
        ]);
        let mut matcher = AnswerMatcher::new(&pool);

        let first = matcher.resolve("Where do you see yourself?", None).expect("answer");
        let second = matcher.resolve("Why are you leaving?", None).expect("answer");
        let third = matcher.resolve("What are your salary expectations?", None);

        assert_eq!(first.rule, MatchRule::Fallback);
        assert_eq!(first.pool_index, 0);
        assert_eq!(second.pool_index, 1);
        assert_eq!(third, None);
    }

    #[test]
    fn fallback_skips_candidates_claimed_by_direct_rules() {
        let pool = pool(&[
            ("Why this company?", "Connect their mission to a project you shipped."),
            ("Something else entirely", "Talk about the on-call rotation you improved."),
        ]);
        let mut matcher = AnswerMatcher::new(&pool);
        let direct = matcher.resolve("Why this company", None).expect("answer");
        assert_eq!(direct.rule, MatchRule::Exact);

        let fallback = matcher.resolve("Describe your ideal manager", None).expect("answer");
        assert_eq!(fallback.rule, MatchRule::Fallback);
        assert_eq!(fallback.pool_index, 1);
    }

    #[test]
    fn only_unusable_answers_resolve_to_none() {
        let pool = pool(&[
            ("Tell me about yourself?", "Use the STAR method"),
            ("Why this company?", "Short"),
        ]);
        assert_eq!(resolve("Tell me about yourself?", 0, &pool), None);
    }

    #[test]
    fn positional_outside_scope_is_ignored() {
        let pool = pool(&[
            ("Prior question text", "Answer that belongs to the prior list."),
            ("Fresh question text", "Answer that belongs to the fresh list."),
        ]);
        let mut matcher = AnswerMatcher::new(&pool);
        let direct = matcher.resolve_direct("Completely different wording", 1..2, Some(0));
        assert_eq!(direct, None);
    }

    #[test]
    fn similarity_is_length_ratio() {
        assert!((similarity("abcd", "ab") - 0.5).abs() < f64::EPSILON);
        assert!((similarity("", "") - 1.0).abs() < f64::EPSILON);
        assert!(similarity("", "abc").abs() < f64::EPSILON);
    }
}
