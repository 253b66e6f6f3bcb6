//! Precedence-ordered namespace classification.

use crate::model::NamespaceDescriptor;
use psready_types::{ids, ConditionKind};

/// The violation category a namespace falls into.
///
/// Buckets are mutually exclusive: `classify` applies its rules top-down and
/// the first match wins. Customer is the catch-all, so every namespace lands
/// in exactly one bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViolationBucket {
    RunLevelZero,
    Openshift,
    DisabledSyncer,
    Customer,
}

impl ViolationBucket {
    pub fn condition_kind(self) -> ConditionKind {
        match self {
            ViolationBucket::RunLevelZero => ConditionKind::RunLevelZero,
            ViolationBucket::Openshift => ConditionKind::Openshift,
            ViolationBucket::DisabledSyncer => ConditionKind::DisabledSyncer,
            ViolationBucket::Customer => ConditionKind::Customer,
        }
    }
}

/// Assign a namespace to its violation bucket.
///
/// Total: any well-formed descriptor classifies, and a missing or malformed
/// label map simply matches no opt-out.
pub fn classify(namespace: &NamespaceDescriptor) -> ViolationBucket {
    // Run-level zero wins even over the openshift prefix and the opt-out label.
    if ids::RUN_LEVEL_ZERO_NAMESPACES.contains(&namespace.name.as_str()) {
        return ViolationBucket::RunLevelZero;
    }

    if namespace.name.starts_with(ids::OPENSHIFT_PREFIX) {
        return ViolationBucket::Openshift;
    }

    // The only case in which a namespace legitimately suppresses enforcement.
    if namespace.has_label_value(ids::LABEL_SYNC_CONTROL, ids::LABEL_SYNC_DISABLED) {
        return ViolationBucket::DisabledSyncer;
    }

    ViolationBucket::Customer
}

/// Per-bucket namespace names for one evaluation pass.
///
/// Owned by a single pass: created empty, filled by sequential [`record`]
/// calls, discarded after rendering. Names keep input order and are not
/// deduplicated.
///
/// [`record`]: ViolationAccumulator::record
#[derive(Clone, Debug, Default)]
pub struct ViolationAccumulator {
    customer: Vec<String>,
    openshift: Vec<String>,
    run_level_zero: Vec<String>,
    disabled_syncer: Vec<String>,
}

impl ViolationAccumulator {
    /// Classify `namespace` and append its name to the matched bucket.
    pub fn record(&mut self, namespace: &NamespaceDescriptor) {
        let bucket = match classify(namespace) {
            ViolationBucket::RunLevelZero => &mut self.run_level_zero,
            ViolationBucket::Openshift => &mut self.openshift,
            ViolationBucket::DisabledSyncer => &mut self.disabled_syncer,
            ViolationBucket::Customer => &mut self.customer,
        };
        bucket.push(namespace.name.clone());
    }

    /// Names accumulated for `kind`, in the order they were recorded.
    pub fn names(&self, kind: ConditionKind) -> &[String] {
        match kind {
            ConditionKind::Customer => &self.customer,
            ConditionKind::Openshift => &self.openshift,
            ConditionKind::RunLevelZero => &self.run_level_zero,
            ConditionKind::DisabledSyncer => &self.disabled_syncer,
        }
    }

    pub fn total(&self) -> usize {
        self.customer.len()
            + self.openshift.len()
            + self.run_level_zero.len()
            + self.disabled_syncer.len()
    }
}
