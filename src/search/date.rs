//! Date parsing for date-range criteria
//!
//! This module provides the default [`DateParser`], backed by `chrono`
//! format strings.

use chrono::{NaiveDate, NaiveDateTime};

use crate::common::traits::DateParser;
use crate::config::SearchConfig;

/// A date parser that tries a list of `chrono` formats in order
#[derive(Debug, Clone)]
pub struct ChronoDateParser {
    /// The formats to try
    formats: Vec<String>,
}

impl ChronoDateParser {
    /// Create a new parser
    ///
    /// # Arguments
    /// * `formats` - `chrono` format strings, tried first to last
    #[must_use]
    pub fn new(formats: Vec<String>) -> Self {
        Self { formats }
    }

    /// Create a parser using the formats of a search configuration
    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.date_formats.clone())
    }
}

impl Default for ChronoDateParser {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

impl DateParser for ChronoDateParser {
    fn parse_date(&self, raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        self.formats.iter().find_map(|format| {
            NaiveDateTime::parse_from_str(raw, format).ok().or_else(|| {
                // Date-only formats fail as datetimes; promote to midnight
                NaiveDate::parse_from_str(raw, format)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
        })
    }
}
