//! Storage error types for the FlavorBook backend.
//!
//! Absent or malformed records are not errors at this layer; they read as
//! `None`. What remains are failures to encode a record and failures of the
//! persistence file itself.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during storage operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StorageError {
    /// A record could not be encoded before writing it.
    #[error("Serialization failed for key '{key}'")]
    SerializationFailed {
        /// The storage key being written
        key: String,
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// The persistence file could not be read or written.
    #[error("File I/O error on {}", .path.display())]
    FileIo {
        /// The file being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The persistence file exists but is not a valid snapshot.
    #[error("Invalid persistence file {}", .path.display())]
    InvalidSnapshot {
        /// The file being loaded
        path: PathBuf,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorageError::FileIo { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Check if this error is related to I/O operations.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            StorageError::FileIo { .. } | StorageError::InvalidSnapshot { .. }
        )
    }

    /// Check if this error came from encoding a record.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, StorageError::SerializationFailed { .. })
    }

    /// Get the storage key if this error is about a specific record.
    pub fn key(&self) -> Option<&str> {
        match self {
            StorageError::SerializationFailed { key, .. } => Some(key),
            _ => None,
        }
    }
}

// Conversion from StorageError to the main Error type
impl From<StorageError> for crate::Error {
    fn from(err: StorageError) -> Self {
        crate::Error::Storage(err)
    }
}
