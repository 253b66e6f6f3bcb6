use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Kubernetes-style binary condition status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ConditionStatus {
    True,
    False,
}

/// The four fixed condition kinds, one per violation bucket.
///
/// `ALL` is the stable order in which condition updates are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionKind {
    Customer,
    Openshift,
    RunLevelZero,
    DisabledSyncer,
}

impl ConditionKind {
    pub const ALL: [ConditionKind; 4] = [
        ConditionKind::Customer,
        ConditionKind::Openshift,
        ConditionKind::RunLevelZero,
        ConditionKind::DisabledSyncer,
    ];

    /// The condition-type string used as the merge key in status objects.
    pub fn as_str(self) -> &'static str {
        match self {
            ConditionKind::Customer => ids::CONDITION_CUSTOMER,
            ConditionKind::Openshift => ids::CONDITION_OPENSHIFT,
            ConditionKind::RunLevelZero => ids::CONDITION_RUN_LEVEL_ZERO,
            ConditionKind::DisabledSyncer => ids::CONDITION_DISABLED_SYNCER,
        }
    }
}

/// Status object of the external condition sink.
///
/// May hold condition types beyond the four fixed kinds; merging is keyed by
/// the condition-type string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadinessStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// A rendered condition value.
///
/// Serialized in the Kubernetes condition shape. `condition_type` is a plain
/// string rather than [`ConditionKind`] because status objects may carry
/// condition types this crate does not own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,

    pub status: ConditionStatus,

    #[serde(default)]
    pub reason: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,

    #[schemars(with = "String")]
    #[serde(rename = "lastTransitionTime", with = "time::serde::rfc3339")]
    pub last_transition_time: OffsetDateTime,
}
