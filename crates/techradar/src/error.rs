//! Error types for tech radar operations.
//!
//! This module provides the main error type [`TechRadarError`] which wraps
//! the error conditions that can occur while indexing a vault, rendering a
//! radar block, or persisting settings.

use std::{io, path::PathBuf};

use thiserror::Error;

use techradar_parser::error::ParseError;

/// The main error type for tech radar operations.
///
/// The `Parse` variant keeps the source text the diagnostics point into so
/// callers can render them with context.
#[derive(Debug, Error)]
pub enum TechRadarError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Index error: {0}")]
    Index(#[from] walkdir::Error),

    #[error("Settings error in {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TechRadarError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
