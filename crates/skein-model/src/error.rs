//! Error types for document loading and normalization.

use std::io;

use thiserror::Error;

/// The main error type for loading Skein documents.
///
/// # Diagnostic Variants
///
/// The `Json` variant retains the document source text alongside the
/// underlying deserialization error, so callers can render the failure
/// location against the original input.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {err}")]
    Json { err: serde_json::Error, src: String },

    #[error("unrecognized document shape: expected branches/nodes, objectTypes, or assemblies")]
    UnrecognizedShape,
}

impl ModelError {
    /// Create a new `Json` error with the associated source text.
    pub fn new_json_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Json {
            err,
            src: src.into(),
        }
    }
}
