//! JSON export and import of the whole checklist collection
//!
//! The exported text is a pretty-printed top-level array of checklists.
//! Import trusts its input: beyond parsing into the collection shape there
//! is no validation, and duplicate or missing ids pass through untouched.

use crate::checklist::Collection;
use serde_json::error::Category;
use std::path::PathBuf;

/// Errors raised while reading a collection from JSON text
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The text is not valid JSON
    #[error("Invalid JSON file: {0}")]
    Parse(#[source] serde_json::Error),

    /// The text is valid JSON but not a list of checklists
    #[error("JSON does not describe a checklist collection: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => ImportError::Shape(err),
            Category::Syntax | Category::Eof | Category::Io => ImportError::Parse(err),
        }
    }
}

/// Errors raised while producing or saving an export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to serialize checklists: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render `collection` as pretty-printed JSON
pub fn export(collection: &Collection) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(collection)?)
}

/// Parse JSON text into a collection
pub fn import(text: &str) -> Result<Collection, ImportError> {
    Ok(serde_json::from_str(text)?)
}
