//! Relationship links between entities

use serde::{Deserialize, Serialize};

/// A directed relationship from a domain entity to a range entity.
///
/// Value-type links carry their numeric value as text in `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub domain_id: i64,
    pub range_id: i64,
    #[serde(default)]
    pub type_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Link {
    #[must_use]
    pub fn new(domain_id: i64, range_id: i64) -> Self {
        Self {
            domain_id,
            range_id,
            type_id: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, type_id: i64) -> Self {
        self.type_id = Some(type_id);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The description parsed as a number, if it is one
    #[must_use]
    pub fn numeric_value(&self) -> Option<f64> {
        self.description
            .as_deref()
            .and_then(|d| d.trim().parse::<f64>().ok())
    }
}
