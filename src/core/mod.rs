//! Core error types and result aliases.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while editing a TOML file.
///
/// Every fatal condition in the crate surfaces as one of these variants.
/// Semantic no-ops (a missing section or key that was asked to be absent,
/// a key already holding the requested value) are never errors; they simply
/// report `changed = false`.
#[derive(Error, Debug)]
pub enum TomlsetError {
    /// The target file exists but its contents are not valid TOML.
    ///
    /// Raised before any mutation is attempted; there is no partial
    /// recovery or fallback document.
    #[error("failed to decode '{path}' as TOML: {details}")]
    Decode {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// Diagnostic from the underlying parser.
        details: String,
    },

    /// The target file could not be read.
    #[error("I/O error on '{path}': {details}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// I/O error details.
        details: String,
    },

    /// Serialization, temporary-file creation, or the atomic replace failed.
    ///
    /// The target file's prior content is intact when this is raised; the
    /// replace is the last step of persistence and is atomic.
    #[error("failed to persist document to '{path}': {details}")]
    Persistence {
        /// Path being persisted when the failure occurred.
        path: PathBuf,
        /// Error details from the persistence operation.
        details: String,
    },

    /// The parameter bundle was rejected before the core was invoked.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// A specialized `Result` type for tomlset operations.
pub type Result<T> = std::result::Result<T, TomlsetError>;

impl TomlsetError {
    /// Creates a decode error with file path context.
    pub fn decode(error: impl std::fmt::Display, path: &Path) -> Self {
        TomlsetError::Decode {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a persistence error with file path context.
    pub fn persistence(error: impl std::fmt::Display, path: &Path) -> Self {
        TomlsetError::Persistence {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
