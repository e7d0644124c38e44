//! A Rust library for filtering research entities (places, actors, events,
//! artifacts) with typed, criterion-based search queries.

pub mod collections;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
pub mod search;

// Re-export the most common types for easier use
// Core types
pub use config::{DuplicateCategoryPolicy, SearchConfig};
pub use error::{Result, SearchError};
pub use models::{Entity, Link, SearchableEntity, TypeNode, TypeRecord};

// Collaborators
pub use collections::Catalog;
pub use common::traits::{DateParser, LinkLookup, TypeHierarchy};

// Search capabilities
pub use search::{
    ChronoDateParser, LogicalOperator, Operator, RawCriterion, RawValue, SearchEngine,
    parse_search_request, search,
};
