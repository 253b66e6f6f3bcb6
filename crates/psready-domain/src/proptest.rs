//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Bucket partitioning (every namespace lands in exactly one bucket)
//! - Classification precedence
//! - Rendering determinism under input reordering

use crate::classify::{classify, ViolationAccumulator, ViolationBucket};
use crate::condition::make_condition;
use crate::model::NamespaceDescriptor;
use proptest::prelude::*;
use psready_types::{ids, ConditionKind};
use std::collections::BTreeMap;
use time::macros::datetime;

/// Strategy for namespace names, weighted toward the interesting shapes.
fn arb_namespace_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z][a-z0-9-]{0,20}").unwrap(),
        Just("default".to_string()),
        Just("kube-system".to_string()),
        Just("kube-public".to_string()),
        prop::string::string_regex("openshift[a-z0-9-]{0,12}").unwrap(),
    ]
}

/// Strategy for label maps, sometimes carrying the opt-out label.
fn arb_labels() -> impl Strategy<Value = BTreeMap<String, String>> {
    let noise = prop::collection::btree_map(
        prop::string::string_regex("[a-z][a-z./-]{0,24}").unwrap(),
        prop::string::string_regex("[a-z0-9]{0,8}").unwrap(),
        0..4,
    );
    let sync_value = prop_oneof![
        Just(None),
        Just(Some("false".to_string())),
        Just(Some("true".to_string())),
        Just(Some("False".to_string())),
    ];
    (noise, sync_value).prop_map(|(mut labels, sync)| {
        if let Some(value) = sync {
            labels.insert(ids::LABEL_SYNC_CONTROL.to_string(), value);
        }
        labels
    })
}

fn arb_descriptor() -> impl Strategy<Value = NamespaceDescriptor> {
    (arb_namespace_name(), arb_labels())
        .prop_map(|(name, labels)| NamespaceDescriptor { name, labels })
}

proptest! {
    /// Every descriptor is counted once, in exactly the bucket classify names.
    #[test]
    fn buckets_partition_the_input(descriptors in prop::collection::vec(arb_descriptor(), 0..32)) {
        let mut accumulator = ViolationAccumulator::default();
        for descriptor in &descriptors {
            accumulator.record(descriptor);
        }

        prop_assert_eq!(accumulator.total(), descriptors.len());

        let mut expected: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for descriptor in &descriptors {
            expected
                .entry(classify(descriptor).condition_kind().as_str())
                .or_default()
                .push(descriptor.name.clone());
        }
        for kind in ConditionKind::ALL {
            let want = expected.remove(kind.as_str()).unwrap_or_default();
            prop_assert_eq!(accumulator.names(kind), want.as_slice());
        }
    }

    /// A single recorded descriptor shows up in one bucket and no other.
    #[test]
    fn record_fills_exactly_one_bucket(descriptor in arb_descriptor()) {
        let mut accumulator = ViolationAccumulator::default();
        accumulator.record(&descriptor);

        let non_empty: Vec<ConditionKind> = ConditionKind::ALL
            .into_iter()
            .filter(|kind| !accumulator.names(*kind).is_empty())
            .collect();
        prop_assert_eq!(non_empty.len(), 1);
        prop_assert_eq!(accumulator.names(non_empty[0]), [descriptor.name.clone()]);
    }

    /// Run-level-zero names win regardless of labels.
    #[test]
    fn run_level_zero_precedence_is_absolute(labels in arb_labels()) {
        for name in ids::RUN_LEVEL_ZERO_NAMESPACES {
            let descriptor = NamespaceDescriptor {
                name: name.to_string(),
                labels: labels.clone(),
            };
            prop_assert_eq!(classify(&descriptor), ViolationBucket::RunLevelZero);
        }
    }

    /// The rendered message ignores input order.
    #[test]
    fn rendering_is_order_insensitive(
        (names, shuffled) in prop::collection::vec(arb_namespace_name(), 1..16)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let at = datetime!(2025-06-01 12:00 UTC);
        let a = make_condition(ConditionKind::Customer, &names, at);
        let b = make_condition(ConditionKind::Customer, &shuffled, at);
        prop_assert_eq!(a.message, b.message);
        prop_assert_eq!(a.status, b.status);
    }
}
