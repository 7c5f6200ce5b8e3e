// error.rs — Error types for project records and the local list store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while validating or persisting project records.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// A required submission field was missing or empty.
    #[error("project {field} required")]
    MissingField { field: &'static str },

    /// An uploaded image filename had no usable final component.
    #[error("unusable image filename: '{name}'")]
    InvalidImageName { name: String },

    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The project list file could not be parsed or serialized.
    #[error("project list serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
