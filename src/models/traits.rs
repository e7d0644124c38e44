//! Trait definitions for domain models
//!
//! This module defines the view the search engine needs of an entity. Any
//! storage-layer record can take part in a search by implementing it.

use crate::models::types::{DateField, TypeNode};

/// A domain record that can be filtered by the search engine.
///
/// `SearchableEntity` exposes the attributes search categories read from.
/// Values are returned as stored; lowercasing and date parsing happen in the
/// extractor.
pub trait SearchableEntity: std::fmt::Debug {
    /// Get the unique identifier for this entity
    fn id(&self) -> i64;

    /// Display name
    fn name(&self) -> &str;

    /// Free-text description, if any
    fn description(&self) -> Option<&str>;

    /// Alternative names
    fn aliases(&self) -> Vec<&str>;

    /// CIDOC-CRM class code, e.g. `E18`
    fn cidoc_class(&self) -> &str;

    /// System class name, e.g. `place`
    fn system_class(&self) -> &str;

    /// Type nodes the entity is tagged with
    fn types(&self) -> &[TypeNode];

    /// Raw value of one of the four temporal bounds
    fn date(&self, field: DateField) -> Option<&str>;
}
