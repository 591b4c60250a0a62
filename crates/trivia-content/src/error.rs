//! Content-engine error types.
//!
//! Two layers: [`ContentError`] is the fatal, environment-level failure
//! that aborts a run (the rounds directory is gone, the manifest cannot be
//! written). [`LoadError`] describes why a single record could not be
//! loaded; callers turn it into a scoped issue or a skipped round and keep
//! going.

use std::path::PathBuf;

use thiserror::Error;

use trivia_core::CoreError;

/// Errors that abort a whole run.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The rounds directory does not exist or is not a directory.
    #[error("rounds directory not found: {path}")]
    RootNotFound { path: PathBuf },

    /// A round directory named on the command line does not exist.
    #[error("round directory not found: {path}")]
    RoundNotFound { path: PathBuf },

    /// A directory that must be listed could not be read.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing an output document failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serializing an output document failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why one record file could not be turned into a typed record.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The record file does not exist.
    #[error("Missing {file} file")]
    Missing { file: &'static str, path: PathBuf },

    /// The record file exists but could not be read.
    #[error("Could not read {file} - {source}")]
    Io {
        file: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The record file is not valid JSON.
    #[error("Invalid JSON in {file} - {source}")]
    Malformed {
        file: &'static str,
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The JSON is valid but not shaped like a record.
    #[error("{0}")]
    Shape(#[from] CoreError),
}

/// Result alias for fatal content operations.
pub type ContentResult<T> = Result<T, ContentError>;
