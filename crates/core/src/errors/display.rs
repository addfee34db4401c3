//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileSystem {
                path,
                operation,
                source,
            } => write!(
                f,
                "file system error during {operation} on '{}': {source}",
                path.display()
            ),
            Error::Configuration { message } => write!(f, "configuration error: {message}"),
            Error::LockUnavailable { path, message } => {
                write!(f, "lock '{}' unavailable: {message}", path.display())
            }
        }
    }
}
