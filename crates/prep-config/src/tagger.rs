//! Keyword tagger configuration.
//!
//! Empty keyword lists mean "use the built-in list" for that tag. A non-empty
//! list replaces the built-in one entirely.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaggerConfig {
    #[serde(default)]
    pub technical: Vec<String>,

    #[serde(default)]
    pub behavioral: Vec<String>,

    #[serde(default)]
    pub company_specific: Vec<String>,

    #[serde(default)]
    pub role_specific: Vec<String>,

    /// Company name from the analyzed job post. Mentions count as company-specific.
    #[serde(default)]
    pub company: String,

    /// Role title from the analyzed job post. Mentions count as role-specific.
    #[serde(default)]
    pub role: String,
}

impl TaggerConfig {
    /// Whether any keyword list overrides the built-in defaults.
    #[must_use]
    pub fn overrides_keywords(&self) -> bool {
        !self.technical.is_empty()
            || !self.behavioral.is_empty()
            || !self.company_specific.is_empty()
            || !self.role_specific.is_empty()
    }
}
