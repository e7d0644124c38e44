//! Configuration for the search engine.

use serde::Deserialize;

use crate::error::Result;

/// How criteria that repeat a category within one search call are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicateCategoryPolicy {
    /// A later criterion replaces the earlier one of the same category
    #[default]
    LastWins,
    /// Every criterion is kept as an independent OR term
    Accumulate,
}

/// Configuration for the `SearchEngine`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// `chrono` formats tried in order when parsing dates. Formats without a
    /// time component resolve to midnight.
    pub date_formats: Vec<String>,
    /// Fail on unrecognised category names instead of treating them as
    /// categories no entity has values for
    pub strict_categories: bool,
    /// Handling of repeated categories within one search call
    pub duplicate_categories: DuplicateCategoryPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d".to_string(),
            ],
            strict_categories: false,
            duplicate_categories: DuplicateCategoryPolicy::LastWins,
        }
    }
}

impl SearchConfig {
    /// Load a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_strict_categories(mut self, strict: bool) -> Self {
        self.strict_categories = strict;
        self
    }

    #[must_use]
    pub fn with_duplicate_categories(mut self, policy: DuplicateCategoryPolicy) -> Self {
        self.duplicate_categories = policy;
        self
    }
}
