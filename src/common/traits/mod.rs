//! Common traits used across the codebase
//!
//! This module defines the lookups the search engine consumes. The storage
//! layer provides real implementations; `collections::Catalog` provides an
//! in-memory one.

pub mod date;
pub mod lookup;

// Re-export collaborator traits
pub use date::DateParser;
pub use lookup::{LinkLookup, TypeHierarchy};
