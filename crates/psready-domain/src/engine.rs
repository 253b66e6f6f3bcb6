use crate::classify::ViolationAccumulator;
use crate::condition::make_condition;
use crate::model::ClusterSnapshot;
use crate::status::ConditionUpdate;
use psready_types::{Condition, ConditionKind, Verdict};
use time::OffsetDateTime;

/// Per-bucket namespace counts (raw, duplicates included).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BucketCounts {
    pub customer: u32,
    pub openshift: u32,
    pub run_level_zero: u32,
    pub disabled_syncer: u32,
}

impl BucketCounts {
    pub fn from_accumulator(accumulator: &ViolationAccumulator) -> Self {
        BucketCounts {
            customer: accumulator.names(ConditionKind::Customer).len() as u32,
            openshift: accumulator.names(ConditionKind::Openshift).len() as u32,
            run_level_zero: accumulator.names(ConditionKind::RunLevelZero).len() as u32,
            disabled_syncer: accumulator.names(ConditionKind::DisabledSyncer).len() as u32,
        }
    }

    pub fn total(&self) -> u32 {
        self.customer + self.openshift + self.run_level_zero + self.disabled_syncer
    }
}

/// Result of one evaluation pass.
#[derive(Clone, Debug)]
pub struct EvaluationOutcome {
    pub verdict: Verdict,
    /// The four conditions in emission order (customer, openshift,
    /// run-level zero, disabled syncer).
    pub conditions: Vec<Condition>,
    pub counts: BucketCounts,
    pub namespaces_scanned: u32,
}

impl EvaluationOutcome {
    /// The composer output: one idempotent upsert per condition, same order.
    pub fn to_condition_updates(&self) -> Vec<ConditionUpdate> {
        self.conditions
            .iter()
            .cloned()
            .map(ConditionUpdate::new)
            .collect()
    }
}

/// Run one evaluation pass over a snapshot.
///
/// Single-threaded and synchronous; the accumulator lives and dies inside
/// this call. `at` becomes the transition time of every rendered condition.
pub fn evaluate(snapshot: &ClusterSnapshot, at: OffsetDateTime) -> EvaluationOutcome {
    let mut accumulator = ViolationAccumulator::default();
    for namespace in &snapshot.namespaces {
        accumulator.record(namespace);
    }

    let conditions: Vec<Condition> = ConditionKind::ALL
        .into_iter()
        .map(|kind| make_condition(kind, accumulator.names(kind), at))
        .collect();

    let counts = BucketCounts::from_accumulator(&accumulator);
    let verdict = if counts.total() == 0 {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    EvaluationOutcome {
        verdict,
        conditions,
        counts,
        namespaces_scanned: snapshot.namespaces.len() as u32,
    }
}
