//! # Inbound Port - BundleApi
//!
//! Primary driving port exposing the bundle store to the transport adapter
//! and to the background sweeper.

use crate::domain::{AppendOutcome, BundleId, RawTx, StoreStatus, SweepReport};

/// Primary API for the Bundle Store.
///
/// All methods take `&self`; implementations handle their own locking so a
/// single instance can be shared behind an `Arc` by every request handler.
///
/// # Example
///
/// ```rust
/// use bundle_store::{BundleApi, BundleId, BundleStore, RawTx, StoreConfig};
/// use std::sync::Arc;
///
/// let api: Arc<dyn BundleApi> = Arc::new(BundleStore::new(StoreConfig::default()));
/// let id = BundleId::parse("b1").unwrap();
///
/// api.append(&id, RawTx::parse("0x456").unwrap());
/// assert_eq!(api.list(&id), vec!["0x456".to_string()]);
/// ```
pub trait BundleApi: Send + Sync {
    /// Appends a record to a bundle, creating the bundle on first use.
    ///
    /// Duplicates are ignored; the oldest records are evicted past capacity.
    fn append(&self, id: &BundleId, record: RawTx) -> AppendOutcome;

    /// Returns a copy of the bundle's records in insertion order.
    ///
    /// Unknown bundles yield an empty vector.
    fn list(&self, id: &BundleId) -> Vec<String>;

    /// Removes a bundle. Returns true if it existed.
    fn delete(&self, id: &BundleId) -> bool;

    /// Removes every bundle older than the retention window.
    fn sweep(&self) -> SweepReport;

    /// Point-in-time summary of the store.
    fn status(&self) -> StoreStatus;

    /// Number of live bundles.
    fn len(&self) -> usize;

    /// Returns true if no bundles are live.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
