//! Tag vocabulary for interview questions.
//!
//! Tags serialize in `kebab-case` via `#[serde(rename_all = "kebab-case")]`,
//! matching the labels shown in the question deck.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// QuestionTag
// ---------------------------------------------------------------------------

/// Categorical label assigned to a question by keyword scan.
///
/// The vocabulary is fixed. Ordering follows declaration order so that tag
/// sets iterate the same way on every run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionTag {
    Technical,
    Behavioral,
    CompanySpecific,
    RoleSpecific,
}

impl QuestionTag {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Technical,
        Self::Behavioral,
        Self::CompanySpecific,
        Self::RoleSpecific,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Behavioral => "behavioral",
            Self::CompanySpecific => "company-specific",
            Self::RoleSpecific => "role-specific",
        }
    }
}

impl fmt::Display for QuestionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == label)
            .ok_or_else(|| CoreError::UnknownTag(s.to_string()))
    }
}
