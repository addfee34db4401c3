//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for dirsweep operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for dirsweep operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    Configuration { message: String },

    /// A directory lock is held by someone else
    LockUnavailable { path: PathBuf, message: String },
}
