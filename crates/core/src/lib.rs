//! Core error types shared across the `dirsweep` workspace.
//!
//! The utilities crate reports failures through the [`Error`] enum defined
//! here; the cache crate folds them into its own `CacheError`.

pub mod errors;

pub use self::errors::{Error, Result};
