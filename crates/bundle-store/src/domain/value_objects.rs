//! Value objects returned by store operations.
//!
//! These are diagnostics for logging and tests. The HTTP surface does not
//! expose them, so callers cannot tell an added record from a deduplicated
//! or trimmed one.

/// What an append did to the bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Record was appended and the bundle stayed within capacity.
    Added,
    /// Record was already present; nothing changed.
    Duplicate,
    /// Record was appended and the oldest `evicted` records were dropped.
    Trimmed { evicted: usize },
}

impl AppendOutcome {
    /// True unless the append was a duplicate.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Duplicate)
    }
}

/// Result of one sweep pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Number of bundles inspected.
    pub scanned: usize,
    /// Number of expired bundles removed.
    pub removed: usize,
}

/// Point-in-time store summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreStatus {
    /// Live bundles.
    pub bundle_count: usize,
    /// Records across all live bundles.
    pub record_count: usize,
    /// Configured per-bundle capacity.
    pub max_records: usize,
    /// Configured retention window in milliseconds.
    pub max_age_ms: u64,
}
