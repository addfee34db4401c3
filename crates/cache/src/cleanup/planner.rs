//! Recency-ordered size-budget eviction planning

use super::scanner::CandidateEntry;
use std::cmp::Reverse;

/// Entries chosen for removal by one sweep, newest first.
///
/// Built once by [`plan_deletions`] and consumed by the executor; there is no
/// way to add or remove entries after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionPlan {
    entries: Vec<CandidateEntry>,
    observed_size: u64,
    target_size: u64,
}

impl DeletionPlan {
    pub fn entries(&self) -> &[CandidateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total size of every eligible entry seen while planning
    pub fn observed_size(&self) -> u64 {
        self.observed_size
    }

    /// Budget in bytes the plan was computed against
    pub fn target_size(&self) -> u64 {
        self.target_size
    }

    pub fn into_entries(self) -> Vec<CandidateEntry> {
        self.entries
    }
}

/// Choose which candidates to delete so the newest entries fit the budget.
///
/// Candidates are walked newest to oldest while summing sizes. The first
/// entry that pushes the running total above `target_size` and every older
/// entry after it end up in the plan. Entries with equal timestamps have no
/// defined relative order.
pub fn plan_deletions(mut candidates: Vec<CandidateEntry>, target_size: u64) -> DeletionPlan {
    candidates.sort_unstable_by_key(|c| Reverse(c.modified));

    let mut total_size: u64 = 0;
    let mut cutoff = candidates.len();
    for (index, candidate) in candidates.iter().enumerate() {
        total_size = total_size.saturating_add(candidate.size);
        if total_size > target_size && cutoff == candidates.len() {
            cutoff = index;
        }
    }

    let entries = candidates.split_off(cutoff);
    DeletionPlan {
        entries,
        observed_size: total_size,
        target_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    const MB: u64 = 1024 * 1024;

    fn entry(name: &str, size: u64, age_secs: u64) -> CandidateEntry {
        let modified = UNIX_EPOCH + Duration::from_secs(1_000_000 - age_secs);
        CandidateEntry::new(format!("/cache/{name}"), size, modified)
    }

    fn names(plan: &DeletionPlan) -> Vec<&str> {
        plan.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_cutover_at_budget_boundary() {
        let candidates = vec![
            entry("oldest", 10 * MB, 300),
            entry("newest", 10 * MB, 100),
            entry("middle", 10 * MB, 200),
        ];

        let plan = plan_deletions(candidates, 15 * MB);
        assert_eq!(names(&plan), ["middle", "oldest"]);
        assert_eq!(plan.observed_size(), 30 * MB);
        assert_eq!(plan.target_size(), 15 * MB);
    }

    #[test]
    fn test_under_budget_plans_nothing() {
        let candidates = vec![entry("a", 5 * MB, 10), entry("b", 10 * MB, 20)];
        let plan = plan_deletions(candidates, 15 * MB);
        assert!(plan.is_empty());
        assert_eq!(plan.observed_size(), 15 * MB);
    }

    #[test]
    fn test_empty_candidates() {
        let plan = plan_deletions(Vec::new(), 0);
        assert!(plan.is_empty());
        assert_eq!(plan.observed_size(), 0);
    }

    #[test]
    fn test_oversized_newest_entry_is_deleted_with_everything_older() {
        let candidates = vec![entry("huge", 20 * MB, 1), entry("small", 1, 50)];
        let plan = plan_deletions(candidates, 15 * MB);
        assert_eq!(names(&plan), ["huge", "small"]);
    }

    #[test]
    fn test_older_small_entries_still_follow_cutoff() {
        // Once over budget, an older entry that would fit is still evicted.
        let candidates = vec![
            entry("a", 8 * MB, 1),
            entry("b", 8 * MB, 2),
            entry("c", 0, 3),
        ];
        let plan = plan_deletions(candidates, 10 * MB);
        assert_eq!(names(&plan), ["b", "c"]);
    }

    #[test]
    fn test_zero_budget_deletes_all_non_empty_prefix() {
        let candidates = vec![entry("empty", 0, 1), entry("full", 1, 2)];
        let plan = plan_deletions(candidates, 0);
        assert_eq!(names(&plan), ["full"]);
    }

    #[test]
    fn test_sizes_saturate() {
        let now = SystemTime::now();
        let candidates = vec![
            CandidateEntry::new("/cache/a", u64::MAX, now),
            CandidateEntry::new("/cache/b", u64::MAX, now - Duration::from_secs(1)),
        ];
        let plan = plan_deletions(candidates, u64::MAX);
        assert_eq!(plan.observed_size(), u64::MAX);
        assert!(plan.is_empty());
    }
}
