//! Utility functions for error handling
//!
//! File helpers that attach the offending path to IO and JSON failures.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, SearchError};

/// Read a file to string, keeping the path in the error
pub fn safe_read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SearchError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and deserialize a JSON file
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = safe_read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
