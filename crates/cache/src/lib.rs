//! Size-bounded eviction sweep for directory-backed caches
//!
//! The owning cache facility hands a [`LockedCache`] to
//! [`DirectoryCacheCleanup::execute`], which deletes the least-recently-modified
//! entries until the directory fits the configured budget. Metadata
//! (`*.properties`) and lock (`*.lock`) files are never touched.

pub mod cleanup;
pub mod config;
pub mod errors;
pub mod operations;
pub mod persistent;

pub use cleanup::{
    can_be_deleted, delete_entries, find_eligible_files, plan_deletions, CandidateEntry,
    DeletionPlan, DirectoryCacheCleanup, EntryRemover, FileRemover, SweepResult,
};
pub use config::CleanupConfig;
pub use errors::{CacheError, RecoveryHint, Result};
pub use operations::{
    NoopOperations, OperationDescriptor, OperationRunner, Phase, TracingOperations,
};
pub use persistent::{DirectoryCache, LockedCache, PersistentCache};
