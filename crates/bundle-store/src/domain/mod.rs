//! # Domain Layer - Bundle Store
//!
//! Pure business logic, no I/O.
//!
//! ## Components
//!
//! - `entities`: BundleId, RawTx, Bundle, StoreConfig
//! - `store`: BundleStore, the lock-guarded bundle mapping
//! - `value_objects`: AppendOutcome, SweepReport, StoreStatus
//! - `errors`: BundleError enumeration

pub mod entities;
pub mod errors;
pub mod store;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use store::*;
pub use value_objects::*;
