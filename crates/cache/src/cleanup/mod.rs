//! Size-bounded cleanup of a directory-backed cache
//!
//! A sweep runs three phases in order, each as its own tracked operation:
//! scan the directory for eligible entries, plan which of them to delete,
//! then delete them. Nothing is persisted between sweeps; every run
//! re-derives its view of the cache from the directory listing.

mod executor;
mod planner;
mod scanner;

pub use executor::{delete_entries, EntryRemover, FileRemover, SweepResult};
pub use planner::{plan_deletions, DeletionPlan};
pub use scanner::{
    can_be_deleted, find_eligible_files, CandidateEntry, LOCK_SUFFIX, PROPERTIES_SUFFIX,
    RESERVED_SUFFIXES,
};

use crate::config::{self, CleanupConfig};
use crate::errors::Result;
use crate::operations::{OperationDescriptor, OperationRunner, Phase};
use crate::persistent::{LockedCache, PersistentCache};
use dirsweep_utils::format_byte_count;

/// Keeps a cache directory under a target size by evicting the
/// least-recently-modified entries.
#[derive(Debug, Clone)]
pub struct DirectoryCacheCleanup<O> {
    operations: O,
    target_size_mb: u64,
}

impl<O: OperationRunner> DirectoryCacheCleanup<O> {
    pub fn new(operations: O, target_size_mb: u64) -> Self {
        Self {
            operations,
            target_size_mb,
        }
    }

    pub fn from_config(operations: O, config: &CleanupConfig) -> Self {
        Self::new(operations, config.target_size_mb)
    }

    pub fn target_size_mb(&self) -> u64 {
        self.target_size_mb
    }

    /// Run one full sweep over a locked cache.
    ///
    /// Only a failed directory scan is returned as an error.
    pub fn execute<C>(&self, locked: &LockedCache<'_, C>) -> Result<SweepResult>
    where
        C: PersistentCache + ?Sized,
    {
        let cache = locked.cache();
        let cache_name = cache.display_name();

        self.operations.call(
            OperationDescriptor::new(Phase::Cleanup, format!("Cleaning up {cache_name}")),
            || self.cleanup(cache, &cache_name),
        )
    }

    fn cleanup<C>(&self, cache: &C, cache_name: &str) -> Result<SweepResult>
    where
        C: PersistentCache + ?Sized,
    {
        let base_dir = cache.base_dir();

        let scanned = self.operations.call(
            OperationDescriptor::new(Phase::Scan, format!("Scanning {}", base_dir.display())),
            || find_eligible_files(base_dir),
        );
        let eligible = match scanned {
            Ok(eligible) => eligible,
            Err(e) => {
                tracing::warn!(
                    cache = %cache_name,
                    error_type = e.error_type(),
                    transient = e.is_transient(),
                    error = %e,
                    "Failed to scan cache directory"
                );
                return Err(e);
            }
        };

        let plan = self.operations.call(
            OperationDescriptor::new(
                Phase::Plan,
                format!("Choosing files to delete from {cache_name}"),
            ),
            || self.find_files_to_delete(cache_name, eligible),
        );

        let result = self.operations.call(
            OperationDescriptor::new(Phase::Delete, format!("Deleting files for {cache_name}")),
            || Self::cleanup_files(cache_name, plan),
        );

        Ok(result)
    }

    /// Planner phase: order by recency and cut at the budget
    pub fn find_files_to_delete(
        &self,
        cache_name: &str,
        eligible: Vec<CandidateEntry>,
    ) -> DeletionPlan {
        let plan = plan_deletions(eligible, config::target_size_bytes(self.target_size_mb));

        tracing::info!(
            cache = %cache_name,
            observed_bytes = plan.observed_size(),
            target_mb = self.target_size_mb,
            planned = plan.len(),
            "{} consuming {} (target: {} MB)",
            cache_name,
            format_byte_count(plan.observed_size()),
            self.target_size_mb
        );

        plan
    }

    /// Executor phase: delete the planned entries and report what was freed
    pub fn cleanup_files(cache_name: &str, plan: DeletionPlan) -> SweepResult {
        if plan.is_empty() {
            return SweepResult::default();
        }

        let planned = plan.len();
        let result = delete_entries(plan, &FileRemover);

        tracing::info!(
            cache = %cache_name,
            planned,
            deleted = result.entries_deleted,
            failures = result.failures,
            bytes_reclaimed = result.bytes_reclaimed,
            "{} removing {} cache entries ({} reclaimed)",
            cache_name,
            result.entries_deleted,
            format_byte_count(result.bytes_reclaimed)
        );

        result
    }
}
