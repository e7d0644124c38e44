//! Common utilities and traits
//!
//! This module provides the collaborator interfaces the search engine is
//! handed by its caller.

pub mod traits;

// Re-export common traits for easier imports
pub use traits::*;
