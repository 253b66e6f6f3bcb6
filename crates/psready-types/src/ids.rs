//! Stable identifiers: condition types, reasons, and classification constants.
//!
//! Condition types are the keys downstream sinks merge on; they must never change.

// Condition types
pub const CONDITION_CUSTOMER: &str = "PodSecurityCustomerEvaluationConditionsDetected";
pub const CONDITION_OPENSHIFT: &str = "PodSecurityOpenshiftEvaluationConditionsDetected";
pub const CONDITION_RUN_LEVEL_ZERO: &str = "PodSecurityRunLevelZeroEvaluationConditionsDetected";
pub const CONDITION_DISABLED_SYNCER: &str =
    "PodSecurityDisabledSyncerEvaluationConditionsDetected";

// Reasons
pub const REASON_VIOLATIONS_DETECTED: &str = "PSViolationsDetected";
pub const REASON_EXPECTED: &str = "ExpectedReason";

// Classification constants
pub const LABEL_SYNC_CONTROL: &str = "security.openshift.io/scc.podSecurityLabelSync";
pub const LABEL_SYNC_DISABLED: &str = "false";
pub const OPENSHIFT_PREFIX: &str = "openshift";

/// Run-level-zero namespaces; matched before the `openshift` prefix rule.
pub const RUN_LEVEL_ZERO_NAMESPACES: [&str; 3] = ["default", "kube-system", "kube-public"];
