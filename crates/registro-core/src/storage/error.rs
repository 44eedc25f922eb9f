//! Persistence error handling
//!
//! Provides typed errors for persistence backends with descriptive messages
//! and recovery suggestions. The document store logs these and carries on;
//! they never fail a store operation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving a snapshot
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to create data directory
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Permission denied accessing path
    #[error("Permission denied: cannot access '{path}'. Check file permissions.")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Disk is full or quota exceeded
    #[error(
        "Disk full or quota exceeded while writing to '{path}'. Free up disk space and try again."
    )]
    DiskFull {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write file
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Atomic write failed during rename
    #[error("Atomic write failed: could not rename '{from}' to '{to}': {source}")]
    AtomicWriteFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Storage key cannot be mapped to the backend
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// SQLite database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Backend refused the operation (e.g. simulated outage)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl PersistenceError {
    /// Create an error from an I/O error with path context
    ///
    /// Classifies the error based on its kind (permission, disk full, etc.)
    pub fn from_io(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => PersistenceError::PermissionDenied {
                path,
                source: error,
            },
            _ if is_disk_full_error(&error) => PersistenceError::DiskFull {
                path,
                source: error,
            },
            _ => PersistenceError::WriteError {
                path,
                source: error,
            },
        }
    }

    /// Check if retrying after user intervention can succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PersistenceError::DiskFull { .. }
                | PersistenceError::PermissionDenied { .. }
                | PersistenceError::Unavailable(_)
        )
    }

    /// Get a recovery suggestion for this error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            PersistenceError::DiskFull { .. } => Some("Free up disk space and try again."),
            PersistenceError::PermissionDenied { .. } => {
                Some("Check file and directory permissions for the data directory.")
            }
            PersistenceError::CreateDirectory { .. } => {
                Some("Check that the parent directory exists and you have write permissions.")
            }
            PersistenceError::Database(_) => {
                Some("The database may be locked or damaged. Switch to the file backend with `registro config set storage file`.")
            }
            _ => None,
        }
    }
}

/// Check if an I/O error indicates disk full condition
fn is_disk_full_error(error: &io::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    msg.contains("no space left")
        || msg.contains("disk full")
        || msg.contains("quota exceeded")
        || msg.contains("not enough space")
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_classification() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = PersistenceError::from_io(io_err, PathBuf::from("/test/path"));

        assert!(matches!(err, PersistenceError::PermissionDenied { .. }));
        assert!(err.is_recoverable());
        assert!(err.recovery_suggestion().is_some());
    }

    #[test]
    fn test_disk_full_detection() {
        let io_err = io::Error::new(io::ErrorKind::Other, "No space left on device");
        let err = PersistenceError::from_io(io_err, PathBuf::from("/full/disk"));

        assert!(matches!(err, PersistenceError::DiskFull { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_other_io_is_write_error() {
        let io_err = io::Error::new(io::ErrorKind::Other, "broken pipe");
        let err = PersistenceError::from_io(io_err, PathBuf::from("/data/documents.json"));

        assert!(matches!(err, PersistenceError::WriteError { .. }));
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("/data/documents.json"));
    }

    #[test]
    fn test_unavailable_display() {
        let err = PersistenceError::Unavailable("medium offline".to_string());
        assert!(err.to_string().contains("medium offline"));
        assert!(err.recovery_suggestion().is_none());
    }
}
