//! # Bundle Store - lock-guarded bundle mapping
//!
//! A single `RwLock` covers the whole mapping:
//!
//! | Operation | Lock |
//! |-----------|------|
//! | `append` | exclusive |
//! | `delete` | exclusive |
//! | `sweep` | exclusive, held for the full pass |
//! | `list`, `len`, `status` | shared |
//!
//! No critical section performs I/O or awaits, so every call completes in
//! bounded time.

use super::entities::{Bundle, BundleId, RawTx, StoreConfig};
use super::errors::StoreConfigError;
use super::value_objects::{AppendOutcome, StoreStatus, SweepReport};
use crate::ports::{BundleApi, SystemTimeSource, TimeSource};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Thread-safe store of bundles with capacity, dedup and expiry rules.
pub struct BundleStore {
    config: StoreConfig,
    bundles: RwLock<HashMap<BundleId, Bundle>>,
    clock: Arc<dyn TimeSource>,
}

impl BundleStore {
    /// Creates an empty store using the system clock.
    ///
    /// `config` is taken as-is; use [`BundleStore::try_new`] for
    /// configuration that has not been validated.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_time_source(config, Arc::new(SystemTimeSource::new()))
    }

    /// Validates `config`, then creates an empty store using the system clock.
    pub fn try_new(config: StoreConfig) -> Result<Self, StoreConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Creates an empty store with an injected clock.
    pub fn with_time_source(config: StoreConfig, clock: Arc<dyn TimeSource>) -> Self {
        Self {
            config,
            bundles: RwLock::new(HashMap::new()),
            clock,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Appends `record` to the bundle, creating it stamped with the current
    /// time if absent.
    pub fn append(&self, id: &BundleId, record: RawTx) -> AppendOutcome {
        let mut bundles = self.bundles.write();

        let bundle = bundles
            .entry(id.clone())
            .or_insert_with(|| Bundle::new(self.clock.now()));
        let outcome = bundle.push(record, self.config.max_records);
        let len = bundle.len();
        drop(bundles);

        debug!(
            bundle_id = %id,
            outcome = ?outcome,
            changed = outcome.is_mutation(),
            len,
            "Appended to bundle"
        );
        outcome
    }

    /// Copy of the bundle's records in insertion order; empty if absent.
    pub fn list(&self, id: &BundleId) -> Vec<String> {
        self.bundles
            .read()
            .get(id)
            .map(Bundle::records)
            .unwrap_or_default()
    }

    /// Removes the bundle. Idempotent; returns whether it existed.
    pub fn delete(&self, id: &BundleId) -> bool {
        let removed = self.bundles.write().remove(id).is_some();
        debug!(bundle_id = %id, removed, "Deleted bundle");
        removed
    }

    /// Removes every bundle whose age exceeds `max_age`.
    pub fn sweep(&self) -> SweepReport {
        let mut bundles = self.bundles.write();
        let now = self.clock.now();
        let max_age = self.config.max_age;
        let scanned = bundles.len();

        bundles.retain(|_, bundle| !bundle.is_expired(now, max_age));

        SweepReport {
            scanned,
            removed: scanned - bundles.len(),
        }
    }

    /// Returns true if the bundle is live.
    pub fn contains(&self, id: &BundleId) -> bool {
        self.bundles.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.bundles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.read().is_empty()
    }

    pub fn status(&self) -> StoreStatus {
        let bundles = self.bundles.read();
        StoreStatus {
            bundle_count: bundles.len(),
            record_count: bundles.values().map(Bundle::len).sum(),
            max_records: self.config.max_records,
            max_age_ms: self.config.max_age.as_millis() as u64,
        }
    }
}

impl BundleApi for BundleStore {
    fn append(&self, id: &BundleId, record: RawTx) -> AppendOutcome {
        BundleStore::append(self, id, record)
    }

    fn list(&self, id: &BundleId) -> Vec<String> {
        BundleStore::list(self, id)
    }

    fn delete(&self, id: &BundleId) -> bool {
        BundleStore::delete(self, id)
    }

    fn sweep(&self) -> SweepReport {
        BundleStore::sweep(self)
    }

    fn status(&self) -> StoreStatus {
        BundleStore::status(self)
    }

    fn len(&self) -> usize {
        BundleStore::len(self)
    }
}

impl std::fmt::Debug for BundleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleStore")
            .field("config", &self.config)
            .field("bundles", &self.bundles.read().len())
            .finish()
    }
}
