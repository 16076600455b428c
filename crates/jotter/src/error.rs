//! Error types for jotter.
//!
//! This module defines all error types used throughout the jotter crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for jotter operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// The note store file is missing or could not be read.
    #[error("failed to read note store at {path}: {source}")]
    StorageRead {
        /// Path to the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The note store file does not contain a JSON array of objects.
    #[error("malformed note store at {path}: {source}")]
    StorageParse {
        /// Path to the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Writing the note store file failed.
    #[error("failed to write note store at {path}: {source}")]
    StorageWrite {
        /// Path that was being written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system or socket operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for jotter operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a storage read error for the given path.
    #[must_use]
    pub fn storage_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageRead {
            path: path.into(),
            source,
        }
    }

    /// Create a storage parse error for the given path.
    #[must_use]
    pub fn storage_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::StorageParse {
            path: path.into(),
            source,
        }
    }

    /// Create a storage write error for the given path.
    #[must_use]
    pub fn storage_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error means the store file does not exist.
    #[must_use]
    pub fn is_store_missing(&self) -> bool {
        matches!(
            self,
            Self::StorageRead { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
