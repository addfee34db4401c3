//! Core error types for the cache sweep

use std::borrow::Cow;
use std::path::PathBuf;
use std::time::Duration;

/// Result type for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Error type for cache sweep operations
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// I/O errors during cache operations
    #[error("I/O error during {operation} on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        operation: Cow<'static, str>,
        #[source]
        source: std::io::Error,
        recovery_hint: RecoveryHint,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        recovery_hint: RecoveryHint,
    },

    /// The cache directory lock is held elsewhere
    #[error("Cache lock '{}' is held by another process", path.display())]
    LockUnavailable {
        path: PathBuf,
        recovery_hint: RecoveryHint,
    },
}

/// Recovery hints for error handling
#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryHint {
    /// Retry the operation
    Retry { after: Duration },

    /// Check file permissions
    CheckPermissions { path: PathBuf },

    /// Recreate cache file/directory
    Recreate,

    /// Update cache configuration
    UpdateConfiguration,

    /// Operation can be safely ignored
    Ignore,
}
