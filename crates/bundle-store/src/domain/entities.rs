//! Core entities for the Bundle Store.
//!
//! `BundleId` and `RawTx` can only be built from non-empty strings, so a
//! value that reaches the store has already passed validation.

use super::errors::{BundleError, StoreConfigError};
use super::value_objects::AppendOutcome;
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Caller-supplied bundle key. Opaque apart from being non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BundleId(String);

impl BundleId {
    /// Validates and wraps a bundle id.
    pub fn parse(id: impl Into<String>) -> Result<Self, BundleError> {
        let id = id.into();
        if id.is_empty() {
            return Err(BundleError::EmptyBundleId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BundleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BundleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An opaque raw transaction, stored verbatim and compared for equality only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawTx(String);

impl RawTx {
    /// Validates and wraps a raw transaction.
    pub fn parse(raw: impl Into<String>) -> Result<Self, BundleError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(BundleError::EmptyRecord);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RawTx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single bundle: ordered, deduplicated records plus its creation time.
///
/// INVARIANTS:
/// - No two records are equal
/// - `records.len() <= max_records` after every `push()`
/// - `created_at` never changes after construction
#[derive(Clone, Debug)]
pub struct Bundle {
    records: VecDeque<String>,
    created_at: Timestamp,
}

impl Bundle {
    /// Creates an empty bundle stamped with its creation time.
    pub fn new(created_at: Timestamp) -> Self {
        Self {
            records: VecDeque::new(),
            created_at,
        }
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, record: &str) -> bool {
        self.records.iter().any(|r| r == record)
    }

    /// Owned copy of the records in insertion order.
    pub fn records(&self) -> Vec<String> {
        self.records.iter().cloned().collect()
    }

    /// Appends a record unless already present, then evicts from the front
    /// until at most `max_records` remain.
    pub fn push(&mut self, record: RawTx, max_records: usize) -> AppendOutcome {
        if self.contains(record.as_str()) {
            return AppendOutcome::Duplicate;
        }

        self.records.push_back(record.into_inner());

        let mut evicted = 0;
        while self.records.len() > max_records {
            self.records.pop_front();
            evicted += 1;
        }

        if evicted == 0 {
            AppendOutcome::Added
        } else {
            AppendOutcome::Trimmed { evicted }
        }
    }

    /// True once strictly more than `max_age` has passed since creation.
    pub fn is_expired(&self, now: Timestamp, max_age: Duration) -> bool {
        let age_ms = now.saturating_sub(self.created_at);
        u128::from(age_ms) > max_age.as_millis()
    }
}

/// Store tunables, fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Retention window, measured from bundle creation.
    pub max_age: Duration,
    /// Per-bundle capacity.
    pub max_records: usize,
    /// Period of the background sweep.
    pub sweep_interval: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_age: Duration::from_secs(10 * 60),
            max_records: 15,
            sweep_interval: Duration::from_secs(60),
        }
    }
}

impl StoreConfig {
    /// Creates a small config for testing.
    pub fn for_testing() -> Self {
        Self {
            max_age: Duration::from_millis(100),
            max_records: 2,
            sweep_interval: Duration::from_millis(10),
        }
    }

    pub fn validate(&self) -> Result<(), StoreConfigError> {
        if self.max_records == 0 {
            return Err(StoreConfigError::ZeroCapacity);
        }
        if self.max_age.is_zero() {
            return Err(StoreConfigError::ZeroMaxAge);
        }
        if self.sweep_interval.is_zero() {
            return Err(StoreConfigError::ZeroSweepInterval);
        }
        Ok(())
    }
}
