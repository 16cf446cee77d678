//! Property-based tests for bundle mutation rules.
//!
//! Verifies across arbitrary append sequences:
//! - Appending the same record twice equals appending it once
//! - Distinct appends past capacity keep exactly the newest `max_records`
//! - Records come back in first-insertion order
//! - No sequence can produce duplicates or exceed capacity

use std::collections::HashSet;

use bundle_store::{BundleId, BundleStore, RawTx, StoreConfig};
use proptest::prelude::*;

// =============================================================================
// Helpers
// =============================================================================

fn store(max_records: usize) -> BundleStore {
    BundleStore::new(StoreConfig {
        max_records,
        ..StoreConfig::default()
    })
}

fn bundle_id() -> BundleId {
    BundleId::parse("prop-bundle").unwrap()
}

fn append_all(store: &BundleStore, records: &[String]) {
    let id = bundle_id();
    for record in records {
        store.append(&id, RawTx::parse(record.clone()).unwrap());
    }
}

// =============================================================================
// Strategies
// =============================================================================

/// Short hex-ish records from a small alphabet so duplicates are common.
fn arb_record() -> impl Strategy<Value = String> {
    "0x[0-9a-f]{1,2}"
}

/// Distinct records, in generation order.
fn arb_distinct_records(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_record(), 0..max).prop_map(|records| {
        let mut seen = HashSet::new();
        records
            .into_iter()
            .filter(|r| seen.insert(r.clone()))
            .collect()
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_double_append_is_idempotent(
        records in prop::collection::vec(arb_record(), 0..40),
        max_records in 1usize..20,
    ) {
        let once = store(max_records);
        append_all(&once, &records);

        let twice = store(max_records);
        let doubled: Vec<String> = records
            .iter()
            .flat_map(|r| [r.clone(), r.clone()])
            .collect();
        append_all(&twice, &doubled);

        prop_assert_eq!(once.list(&bundle_id()), twice.list(&bundle_id()));
    }

    #[test]
    fn prop_capacity_keeps_newest(
        records in arb_distinct_records(60),
        max_records in 1usize..20,
    ) {
        prop_assume!(records.len() >= max_records);

        let s = store(max_records);
        append_all(&s, &records);

        let expected = records[records.len() - max_records..].to_vec();
        prop_assert_eq!(s.list(&bundle_id()), expected);
    }

    #[test]
    fn prop_order_preserved_below_capacity(
        records in arb_distinct_records(15),
    ) {
        let s = store(15);
        append_all(&s, &records);
        prop_assert_eq!(s.list(&bundle_id()), records);
    }

    #[test]
    fn prop_invariants_hold_for_any_sequence(
        records in prop::collection::vec(arb_record(), 1..80),
        max_records in 1usize..20,
    ) {
        let s = store(max_records);
        append_all(&s, &records);

        let listed = s.list(&bundle_id());
        let unique: HashSet<_> = listed.iter().collect();

        prop_assert!(listed.len() <= max_records);
        prop_assert_eq!(unique.len(), listed.len());
        prop_assert!(listed.iter().all(|r| records.contains(r)));
        prop_assert!(listed.contains(records.last().unwrap()));
    }
}
