//! Error types for Skein operations.
//!
//! This module provides the main error type [`SkeinError`] which wraps the
//! error conditions that can occur while loading, laying out, and exporting
//! a topology graph.

use std::io;

use thiserror::Error;

use skein_model::ModelError;

/// The main error type for Skein operations.
///
/// The `Model` variant carries the structured loading error, including the
/// document source text for rich reporting (see `skein-cli`'s error
/// adapter).
#[derive(Debug, Error)]
pub enum SkeinError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}
