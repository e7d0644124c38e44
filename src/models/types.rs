//! Shared value types for the domain models.

use serde::{Deserialize, Serialize};

/// A type node as attached to an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeNode {
    pub id: i64,
    pub name: String,
}

impl TypeNode {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A node of the type hierarchy. Roots have no parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub parent: Option<i64>,
}

/// The four temporal bounds of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    BeginFrom,
    BeginTo,
    EndFrom,
    EndTo,
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateField::BeginFrom => write!(f, "beginFrom"),
            DateField::BeginTo => write!(f, "beginTo"),
            DateField::EndFrom => write!(f, "endFrom"),
            DateField::EndTo => write!(f, "endTo"),
        }
    }
}
