//! Bundle store error types.
//!
//! Store operations themselves cannot fail; these errors only come out of
//! constructing the validated input types and checking configuration.

use thiserror::Error;

/// Rejected input for a store operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BundleError {
    /// Bundle id was empty.
    #[error("no bundle id")]
    EmptyBundleId,

    /// Raw transaction was empty.
    #[error("rawTx is required")]
    EmptyRecord,
}

/// Invalid store configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreConfigError {
    /// Capacity of zero would make every append evict itself.
    #[error("max_records cannot be 0")]
    ZeroCapacity,

    /// Retention window of zero.
    #[error("max_age cannot be 0")]
    ZeroMaxAge,

    /// Sweep period of zero.
    #[error("sweep_interval cannot be 0")]
    ZeroSweepInterval,
}
