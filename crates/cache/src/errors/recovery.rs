//! Recovery utilities for cache errors

use super::types::{CacheError, RecoveryHint};

impl CacheError {
    /// Get the recovery hint for this error
    #[must_use]
    pub const fn recovery_hint(&self) -> &RecoveryHint {
        match self {
            Self::Io { recovery_hint, .. }
            | Self::Configuration { recovery_hint, .. }
            | Self::LockUnavailable { recovery_hint, .. } => recovery_hint,
        }
    }

    /// Check if this error is transient and can be retried
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self.recovery_hint(), RecoveryHint::Retry { .. })
    }

    /// Short error type label for structured logs
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::Configuration { .. } => "configuration",
            Self::LockUnavailable { .. } => "lock_unavailable",
        }
    }
}
