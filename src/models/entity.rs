//! Entity model
//!
//! This module contains the concrete `Entity` record: a place, actor, event,
//! artifact or any other domain record loaded from the storage layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::traits::SearchableEntity;
use crate::models::types::{DateField, TypeNode};

/// Core entity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Alias names keyed by the alias entity's id
    #[serde(default)]
    pub aliases: BTreeMap<i64, String>,
    /// System class name (`place`, `person`, `artifact`, ...)
    pub system_class: String,
    /// CIDOC-CRM class code (`E18`, `E21`, ...)
    pub cidoc_class: String,
    /// Type nodes the entity is tagged with
    #[serde(default)]
    pub types: Vec<TypeNode>,
    /// Earliest possible begin, as stored
    #[serde(default)]
    pub begin_from: Option<String>,
    /// Latest possible begin, as stored
    #[serde(default)]
    pub begin_to: Option<String>,
    /// Earliest possible end, as stored
    #[serde(default)]
    pub end_from: Option<String>,
    /// Latest possible end, as stored
    #[serde(default)]
    pub end_to: Option<String>,
}

impl Entity {
    /// Create an entity with no description, aliases, types or dates
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        system_class: impl Into<String>,
        cidoc_class: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            aliases: BTreeMap::new(),
            system_class: system_class.into(),
            cidoc_class: cidoc_class.into(),
            types: Vec::new(),
            begin_from: None,
            begin_to: None,
            end_from: None,
            end_to: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_alias(mut self, alias_id: i64, alias: impl Into<String>) -> Self {
        self.aliases.insert(alias_id, alias.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, type_node: TypeNode) -> Self {
        self.types.push(type_node);
        self
    }

    #[must_use]
    pub fn with_date(mut self, field: DateField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            DateField::BeginFrom => self.begin_from = value,
            DateField::BeginTo => self.begin_to = value,
            DateField::EndFrom => self.end_from = value,
            DateField::EndTo => self.end_to = value,
        }
        self
    }
}

impl SearchableEntity for Entity {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn aliases(&self) -> Vec<&str> {
        self.aliases.values().map(String::as_str).collect()
    }

    fn cidoc_class(&self) -> &str {
        &self.cidoc_class
    }

    fn system_class(&self) -> &str {
        &self.system_class
    }

    fn types(&self) -> &[TypeNode] {
        &self.types
    }

    fn date(&self, field: DateField) -> Option<&str> {
        match field {
            DateField::BeginFrom => self.begin_from.as_deref(),
            DateField::BeginTo => self.begin_to.as_deref(),
            DateField::EndFrom => self.end_from.as_deref(),
            DateField::EndTo => self.end_to.as_deref(),
        }
    }
}
