//! The persistent cache handle the sweep operates on

use crate::errors::{CacheError, Result};
use dirsweep_utils::DirectoryLock;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the lock file kept inside every locked cache directory
pub const LOCK_FILE_NAME: &str = "cache.lock";

/// A directory-backed cache owned by some other facility
pub trait PersistentCache {
    /// Root under which the cache entries live
    fn base_dir(&self) -> &Path;

    /// Human-readable identifier used in log lines
    fn display_name(&self) -> String;
}

/// Plain directory cache identified by a name
#[derive(Debug, Clone)]
pub struct DirectoryCache {
    base_dir: PathBuf,
    name: String,
}

impl DirectoryCache {
    pub fn new(base_dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            name: name.into(),
        }
    }
}

impl PersistentCache for DirectoryCache {
    fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.base_dir.display())
    }
}

impl fmt::Display for DirectoryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Proof that the caller has exclusive or cooperative access to a cache.
///
/// A sweep only accepts this type. The guard either owns an exclusive lock
/// on [`LOCK_FILE_NAME`] or records that the owning facility already holds
/// one.
#[derive(Debug)]
pub struct LockedCache<'a, C: PersistentCache + ?Sized> {
    cache: &'a C,
    lock: Option<DirectoryLock>,
}

impl<'a, C: PersistentCache + ?Sized> LockedCache<'a, C> {
    /// Take an exclusive lock on the cache directory, failing if it is held
    pub fn acquire(cache: &'a C) -> Result<Self> {
        let lock_path = cache.base_dir().join(LOCK_FILE_NAME);
        let lock = DirectoryLock::try_acquire(&lock_path).map_err(CacheError::from)?;
        tracing::debug!(
            cache = %cache.display_name(),
            lock = %lock.lock_path().display(),
            pid = lock.pid(),
            "Locked cache directory"
        );
        Ok(Self {
            cache,
            lock: Some(lock),
        })
    }

    /// Wrap a cache whose lock the owning facility already holds
    pub fn held_by_owner(cache: &'a C) -> Self {
        Self { cache, lock: None }
    }

    pub fn cache(&self) -> &'a C {
        self.cache
    }

    /// Whether this guard owns the directory lock itself
    pub fn owns_lock(&self) -> bool {
        self.lock.is_some()
    }
}
