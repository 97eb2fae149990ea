//! Keyword-based question tagging.
//!
//! The reconciler only needs a pure `&str -> tag set` function. [`QuestionTagger`]
//! is that seam; [`KeywordTagger`] is the built-in implementation, and plain
//! closures work too.

use std::collections::{BTreeMap, BTreeSet};

use prep_core::enums::QuestionTag;

/// Assigns zero or more tags to a question's display text.
pub trait QuestionTagger {
    fn tag(&self, text: &str) -> BTreeSet<QuestionTag>;
}

impl<F> QuestionTagger for F
where
    F: Fn(&str) -> BTreeSet<QuestionTag>,
{
    fn tag(&self, text: &str) -> BTreeSet<QuestionTag> {
        self(text)
    }
}

const TECHNICAL_KEYWORDS: &[&str] = &[
    "algorithm",
    "algorithms",
    "api",
    "apis",
    "architecture",
    "cache",
    "caching",
    "code",
    "coding",
    "complexity",
    "concurrency",
    "data structure",
    "data structures",
    "database",
    "databases",
    "debug",
    "debugging",
    "deploy",
    "deployment",
    "design a",
    "distributed",
    "latency",
    "performance",
    "scalability",
    "scale",
    "security",
    "sql",
    "system design",
    "testing",
];

const BEHAVIORAL_KEYWORDS: &[&str] = &[
    "tell me about a time",
    "describe a time",
    "describe a situation",
    "give an example",
    "challenge",
    "conflict",
    "deadline",
    "deadlines",
    "disagree",
    "disagreement",
    "failed",
    "failure",
    "feedback",
    "lead",
    "leadership",
    "mistake",
    "pressure",
    "strength",
    "strengths",
    "team",
    "teammate",
    "weakness",
    "weaknesses",
];

const COMPANY_KEYWORDS: &[&str] = &[
    "this company",
    "our company",
    "our mission",
    "our product",
    "our products",
    "our customers",
    "our culture",
    "our values",
    "work here",
    "why us",
];

const ROLE_KEYWORDS: &[&str] = &[
    "this role",
    "this position",
    "the role",
    "the position",
    "day-to-day",
    "first 90 days",
    "job description",
    "responsibilities",
];

fn built_in(tag: QuestionTag) -> &'static [&'static str] {
    match tag {
        QuestionTag::Technical => TECHNICAL_KEYWORDS,
        QuestionTag::Behavioral => BEHAVIORAL_KEYWORDS,
        QuestionTag::CompanySpecific => COMPANY_KEYWORDS,
        QuestionTag::RoleSpecific => ROLE_KEYWORDS,
    }
}

/// Tags a question when its lower-cased text contains any keyword of a tag
/// as a whole word (or whole phrase).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTagger {
    keywords: BTreeMap<QuestionTag, Vec<String>>,
}

impl Default for KeywordTagger {
    fn default() -> Self {
        let keywords = QuestionTag::ALL
            .iter()
            .map(|&tag| {
                let list = built_in(tag).iter().map(|k| (*k).to_string()).collect();
                (tag, list)
            })
            .collect();
        Self { keywords }
    }
}

impl KeywordTagger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the keyword list of `tag`. An empty iterator keeps the current list.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, tag: QuestionTag, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list: Vec<String> = keywords
            .into_iter()
            .filter_map(|k| prepare_keyword(k.as_ref()))
            .collect();
        if !list.is_empty() {
            self.keywords.insert(tag, list);
        }
        self
    }

    /// Count mentions of the company name as company-specific.
    #[must_use]
    pub fn with_company(self, company: &str) -> Self {
        self.with_extra(QuestionTag::CompanySpecific, company)
    }

    /// Count mentions of the role title as role-specific.
    #[must_use]
    pub fn with_role(self, role: &str) -> Self {
        self.with_extra(QuestionTag::RoleSpecific, role)
    }

    /// Keywords currently active for `tag`.
    #[must_use]
    pub fn keywords(&self, tag: QuestionTag) -> &[String] {
        self.keywords.get(&tag).map(Vec::as_slice).unwrap_or_default()
    }

    fn with_extra(mut self, tag: QuestionTag, keyword: &str) -> Self {
        if let Some(keyword) = prepare_keyword(keyword) {
            let list = self.keywords.entry(tag).or_default();
            if !list.contains(&keyword) {
                list.push(keyword);
            }
        }
        self
    }
}

impl QuestionTagger for KeywordTagger {
    fn tag(&self, text: &str) -> BTreeSet<QuestionTag> {
        let haystack = text.to_lowercase();
        self.keywords
            .iter()
            .filter(|(_, list)| list.iter().any(|k| contains_word(&haystack, k)))
            .map(|(tag, _)| *tag)
            .collect()
    }
}

fn prepare_keyword(raw: &str) -> Option<String> {
    let keyword = raw.trim().to_lowercase();
    (!keyword.is_empty()).then_some(keyword)
}

/// Whether `needle` occurs in `haystack` with no word character directly
/// before or after it.
fn contains_word(haystack: &str, needle: &str) -> bool {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    haystack.match_indices(needle).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(is_word) && !after.is_some_and(is_word)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn tags(list: &[QuestionTag]) -> BTreeSet<QuestionTag> {
        list.iter().copied().collect()
    }

    #[rstest]
    #[case::behavioral(
        "Tell me about a time you disagreed with your manager.",
        &[QuestionTag::Behavioral]
    )]
    #[case::technical("How would you design a rate limiter for an API?", &[QuestionTag::Technical])]
    #[case::company("Why do you want to work here?", &[QuestionTag::CompanySpecific])]
    #[case::role(
        "What would your first 90 days in this role look like?",
        &[QuestionTag::RoleSpecific]
    )]
    #[case::several(
        "Describe a time your team shipped a database migration under pressure.",
        &[QuestionTag::Technical, QuestionTag::Behavioral]
    )]
    #[case::none("Where do you see yourself in five years?", &[])]
    fn default_keywords(#[case] text: &str, #[case] expected: &[QuestionTag]) {
        assert_eq!(KeywordTagger::default().tag(text), tags(expected));
    }

    #[test]
    fn keywords_match_whole_words_only() {
        let tagger = KeywordTagger::default();
        // "capital" contains "api", "steam" contains "team".
        assert_eq!(tagger.tag("Which capital city would you move to for steam?"), tags(&[]));
    }

    #[test]
    fn company_and_role_extend_lists() {
        let tagger = KeywordTagger::default()
            .with_company("Acme Robotics")
            .with_role("  Platform Engineer ");
        assert_eq!(
            tagger.tag("What excites you about Acme Robotics?"),
            tags(&[QuestionTag::CompanySpecific])
        );
        assert_eq!(
            tagger.tag("What makes a great platform engineer?"),
            tags(&[QuestionTag::RoleSpecific])
        );
    }

    #[test]
    fn blank_company_is_ignored() {
        let tagger = KeywordTagger::default().with_company("   ");
        assert_eq!(
            tagger.keywords(QuestionTag::CompanySpecific).len(),
            COMPANY_KEYWORDS.len()
        );
    }

    #[test]
    fn with_keywords_replaces_list() {
        let tagger = KeywordTagger::default().with_keywords(QuestionTag::Behavioral, ["Mentor"]);
        assert_eq!(tagger.keywords(QuestionTag::Behavioral), ["mentor".to_string()]);
        assert_eq!(
            tagger.tag("Tell me about a time you failed."),
            tags(&[])
        );
        assert_eq!(
            tagger.tag("How do you mentor junior engineers?"),
            tags(&[QuestionTag::Behavioral])
        );
    }

    #[test]
    fn empty_override_keeps_built_in_list() {
        let tagger =
            KeywordTagger::default().with_keywords(QuestionTag::Technical, Vec::<String>::new());
        assert_eq!(
            tagger.keywords(QuestionTag::Technical).len(),
            TECHNICAL_KEYWORDS.len()
        );
    }

    #[test]
    fn closures_are_taggers() {
        let tagger = |text: &str| {
            if text.contains('?') {
                tags(&[QuestionTag::Technical])
            } else {
                BTreeSet::new()
            }
        };
        assert_eq!(tagger.tag("Why?"), tags(&[QuestionTag::Technical]));
    }
}
