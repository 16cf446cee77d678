//! # Bundle Store
//!
//! Ephemeral, in-memory store of named bundles. A bundle is a bounded,
//! deduplicated, insertion-ordered list of raw transactions that expires a
//! fixed time after it was created.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | No duplicate records within a bundle | `domain/entities.rs` - `Bundle::push()` |
//! | At most `max_records` per bundle, oldest evicted first | `domain/entities.rs` - `Bundle::push()` |
//! | `created_at` set once on creation | `domain/store.rs` - `append()` entry insert |
//! | Bundles older than `max_age` removed by sweep | `domain/store.rs` - `sweep()` |
//!
//! ## Bundle Lifecycle
//!
//! ```text
//! [ABSENT] ──append──→ [ACTIVE] ──append/list──→ [ACTIVE]
//!                          │
//!                          └── delete / sweep (age > max_age) ──→ [ABSENT]
//! ```
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  service/sweeper.rs - periodic expiration task (tokio)          │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ drives ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - BundleApi trait                            │
//! │  ports/outbound.rs - TimeSource trait                           │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/entities.rs      - BundleId, RawTx, Bundle, StoreConfig │
//! │  domain/store.rs         - BundleStore behind a RwLock          │
//! │  domain/value_objects.rs - AppendOutcome, SweepReport, status   │
//! │  domain/errors.rs        - BundleError                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bundle_store::{BundleId, BundleStore, RawTx, StoreConfig};
//!
//! let store = BundleStore::new(StoreConfig::default());
//! let id = BundleId::parse("b1").unwrap();
//!
//! store.append(&id, RawTx::parse("0x123").unwrap());
//! store.append(&id, RawTx::parse("0x123").unwrap());
//! assert_eq!(store.list(&id), vec!["0x123".to_string()]);
//!
//! store.delete(&id);
//! assert!(store.list(&id).is_empty());
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::*;
pub use service::*;
