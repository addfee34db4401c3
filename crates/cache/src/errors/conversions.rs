//! Error conversion utilities

use super::types::{CacheError, RecoveryHint};
use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

impl CacheError {
    /// Wrap an I/O error, deriving the recovery hint from its kind
    pub fn io(
        path: &Path,
        operation: impl Into<Cow<'static, str>>,
        source: std::io::Error,
    ) -> Self {
        let recovery_hint = match source.kind() {
            ErrorKind::PermissionDenied => RecoveryHint::CheckPermissions {
                path: path.to_path_buf(),
            },
            ErrorKind::NotFound => RecoveryHint::Recreate,
            ErrorKind::WouldBlock | ErrorKind::TimedOut | ErrorKind::Interrupted => {
                RecoveryHint::Retry {
                    after: Duration::from_millis(100),
                }
            }
            _ => RecoveryHint::Ignore,
        };

        Self::Io {
            path: path.to_path_buf(),
            operation: operation.into(),
            source,
            recovery_hint,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            recovery_hint: RecoveryHint::UpdateConfiguration,
        }
    }
}

impl From<dirsweep_core::Error> for CacheError {
    fn from(error: dirsweep_core::Error) -> Self {
        use dirsweep_core::Error;

        match error {
            Error::FileSystem {
                path,
                operation,
                source,
            } => CacheError::io(&path, operation, source),
            Error::LockUnavailable { path, .. } => CacheError::LockUnavailable {
                path,
                recovery_hint: RecoveryHint::Retry {
                    after: Duration::from_secs(1),
                },
            },
            other => CacheError::configuration(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_suggests_recreate() {
        let err = CacheError::io(
            Path::new("/cache"),
            "scan",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.recovery_hint(), &RecoveryHint::Recreate);
        assert!(!err.is_transient());
        assert_eq!(err.error_type(), "io");
    }

    #[test]
    fn test_permission_denied_points_at_path() {
        let err = CacheError::io(
            Path::new("/cache"),
            "scan",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.recovery_hint(),
            &RecoveryHint::CheckPermissions {
                path: PathBuf::from("/cache")
            }
        );
    }

    #[test]
    fn test_lock_contention_is_transient() {
        let core = dirsweep_core::Error::lock_unavailable("/cache/cache.lock", "busy");
        let err = CacheError::from(core);
        assert!(err.is_transient());
        assert_eq!(err.error_type(), "lock_unavailable");
    }

    #[test]
    fn test_core_file_system_error_keeps_operation() {
        let core = dirsweep_core::Error::file_system(
            "/cache/cache.lock",
            "open lock file",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        match CacheError::from(core) {
            CacheError::Io {
                path, operation, ..
            } => {
                assert_eq!(path, PathBuf::from("/cache/cache.lock"));
                assert_eq!(operation, "open lock file");
            }
            other => panic!("expected I/O error, got {other:?}"),
        }
    }
}
