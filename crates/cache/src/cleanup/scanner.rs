//! Eligibility scan of the cache directory

use crate::errors::{CacheError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Suffix of cache metadata files owned by the persistent cache
pub const PROPERTIES_SUFFIX: &str = ".properties";
/// Suffix of lock files owned by the persistent cache
pub const LOCK_SUFFIX: &str = ".lock";
/// Entries ending in one of these are never deleted by a sweep
pub const RESERVED_SUFFIXES: [&str; 2] = [PROPERTIES_SUFFIX, LOCK_SUFFIX];

/// A cache entry observed at scan time.
///
/// Size and timestamp may be stale by the time the entry is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub modified: SystemTime,
}

impl CandidateEntry {
    pub fn new(path: impl Into<PathBuf>, size: u64, modified: SystemTime) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            size,
            modified,
        }
    }
}

/// Whether a sweep may ever delete an entry with this name
pub fn can_be_deleted(name: &str) -> bool {
    !RESERVED_SUFFIXES
        .iter()
        .any(|suffix| name.ends_with(suffix))
}

/// List the regular files under `cache_dir` that a sweep may delete.
///
/// Failing to read the listing is an error. An entry that disappears or
/// cannot be stat'ed mid-scan is skipped.
pub fn find_eligible_files(cache_dir: &Path) -> Result<Vec<CandidateEntry>> {
    let entries = fs::read_dir(cache_dir).map_err(|e| CacheError::io(cache_dir, "scan", e))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CacheError::io(cache_dir, "scan", e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if !can_be_deleted(&name) {
            tracing::trace!(name = %name, "Skipping reserved cache file");
            continue;
        }

        let path = entry.path();
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Failed to stat cache entry");
                continue;
            }
        };

        if !metadata.is_file() {
            tracing::trace!(path = %path.display(), "Skipping non-file cache entry");
            continue;
        }

        let modified = metadata.modified().unwrap_or(UNIX_EPOCH);
        candidates.push(CandidateEntry {
            path,
            name,
            size: metadata.len(),
            modified,
        });
    }

    Ok(candidates)
}
