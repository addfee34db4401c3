//! Deletion of planned entries with per-entry failure isolation

use super::planner::DeletionPlan;
use super::scanner::CandidateEntry;
use std::fs;
use std::io;
use std::path::Path;

/// Aggregate outcome of executing a deletion plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepResult {
    pub entries_deleted: usize,
    pub bytes_reclaimed: u64,
    /// Planned entries that could not be removed
    pub failures: usize,
}

/// Physically removes one cache entry
pub trait EntryRemover {
    fn remove(&self, path: &Path) -> io::Result<()>;
}

/// Removes entries with [`std::fs::remove_file`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRemover;

impl EntryRemover for FileRemover {
    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

/// Delete every planned entry, continuing past individual failures.
///
/// Each entry's size is read before its removal is attempted; a failed
/// removal contributes nothing to `bytes_reclaimed`.
pub fn delete_entries<R: EntryRemover + ?Sized>(plan: DeletionPlan, remover: &R) -> SweepResult {
    let mut result = SweepResult::default();

    for entry in plan.into_entries() {
        let size = current_size(&entry);
        match remover.remove(&entry.path) {
            Ok(()) => {
                result.entries_deleted += 1;
                result.bytes_reclaimed = result.bytes_reclaimed.saturating_add(size);
            }
            Err(e) => {
                tracing::debug!(
                    path = %entry.path.display(),
                    error = %e,
                    "Could not clean up cache entry"
                );
                result.failures += 1;
            }
        }
    }

    result
}

/// Size right before deletion, or the scan-time size if it can't be read
fn current_size(entry: &CandidateEntry) -> u64 {
    fs::symlink_metadata(&entry.path)
        .map(|m| m.len())
        .unwrap_or(entry.size)
}
