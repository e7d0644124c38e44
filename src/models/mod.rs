//! Domain models for research entities
//!
//! This module contains the entity, type and link models the search engine
//! operates on. They are read-only snapshots handed over by the storage layer.

pub mod entity;
pub mod link;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use entity::Entity;
pub use link::Link;
pub use traits::SearchableEntity;
pub use types::{DateField, TypeNode, TypeRecord};
