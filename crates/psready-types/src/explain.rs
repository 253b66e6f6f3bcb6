//! Explain registry for condition types.
//!
//! Maps condition-type strings to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a condition type.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the condition.
    pub title: &'static str,
    /// What the condition reports and why it exists.
    pub description: &'static str,
    /// How to resolve the violations behind it.
    pub remediation: &'static str,
    /// Before/after namespace manifest examples.
    pub examples: ExamplePair,
}

/// Before and after manifest examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// A namespace that would be counted by this condition.
    pub before: &'static str,
    /// A namespace that no longer is.
    pub after: &'static str,
}

/// Look up an explanation by condition-type string.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CONDITION_CUSTOMER => Some(explain_customer()),
        ids::CONDITION_OPENSHIFT => Some(explain_openshift()),
        ids::CONDITION_RUN_LEVEL_ZERO => Some(explain_run_level_zero()),
        ids::CONDITION_DISABLED_SYNCER => Some(explain_disabled_syncer()),
        _ => None,
    }
}

/// List all known condition types.
pub fn all_condition_types() -> &'static [&'static str] {
    &[
        ids::CONDITION_CUSTOMER,
        ids::CONDITION_OPENSHIFT,
        ids::CONDITION_RUN_LEVEL_ZERO,
        ids::CONDITION_DISABLED_SYNCER,
    ]
}

fn explain_customer() -> Explanation {
    Explanation {
        title: "Customer Namespace Violations",
        description: "\
Counts workload namespaces whose pods would be rejected under the enforced
pod-security level. This is the catch-all category: any violating namespace
that is not run-level zero, not openshift-prefixed, and has not opted out of
label syncing lands here.",
        remediation: "\
Bring the workloads into line with the enforced pod-security profile:
- Drop privileged settings (hostPath mounts, host networking, privileged
  containers) where they are not needed
- Set an explicit `pod-security.kubernetes.io/enforce` label matching what
  the workloads actually require
- As a last resort, disable label syncing for the namespace and manage its
  pod-security labels manually",
        examples: ExamplePair {
            before: r#"apiVersion: v1
kind: Namespace
metadata:
  name: team-billing"#,
            after: r#"apiVersion: v1
kind: Namespace
metadata:
  name: team-billing
  labels:
    pod-security.kubernetes.io/enforce: restricted"#,
        },
    }
}

fn explain_openshift() -> Explanation {
    Explanation {
        title: "Platform Namespace Violations",
        description: "\
Counts violating namespaces whose name starts with `openshift`. These are
platform-owned namespaces; their workloads and pod-security labels are managed
by the cluster operators that ship them, not by cluster users.",
        remediation: "\
Do not hand-edit platform namespaces. File a bug against the component that
owns the namespace; the owning operator has to adjust its workloads or its
pod-security labels in its own payload.",
        examples: ExamplePair {
            before: r#"apiVersion: v1
kind: Namespace
metadata:
  name: openshift-logging"#,
            after: r#"# fixed by the owning operator's payload, not by cluster users
apiVersion: v1
kind: Namespace
metadata:
  name: openshift-logging
  labels:
    pod-security.kubernetes.io/enforce: privileged"#,
        },
    }
}

fn explain_run_level_zero() -> Explanation {
    Explanation {
        title: "Run-Level Zero Namespace Violations",
        description: "\
Counts violations in the core infrastructure namespaces `default`,
`kube-system`, and `kube-public`. These namespaces boot before any admission
machinery and are excluded from the openshift-prefix rule even when their
names would also match it.",
        remediation: "\
Workloads generally should not run in run-level zero namespaces at all. Move
user workloads into a regular namespace; anything that must stay is expected
to run privileged and should be reviewed by the cluster administrators.",
        examples: ExamplePair {
            before: r#"# a user deployment running in kube-system
apiVersion: apps/v1
kind: Deployment
metadata:
  name: ingress-shim
  namespace: kube-system"#,
            after: r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: ingress-shim
  namespace: team-networking"#,
        },
    }
}

fn explain_disabled_syncer() -> Explanation {
    Explanation {
        title: "Label Syncing Disabled",
        description: "\
Counts violating namespaces that explicitly opted out of pod-security label
syncing by setting the `security.openshift.io/scc.podSecurityLabelSync` label
to the exact string \"false\". Opting out is the only supported way to
suppress enforcement, and these namespaces still carry violations.",
        remediation: "\
Either re-enable label syncing and let the platform manage pod-security
labels, or keep the opt-out and maintain correct
`pod-security.kubernetes.io/*` labels yourself:
- Remove the opt-out label, or set it to \"true\"
- If the opt-out stays, audit the namespace's workloads against the
  pod-security level you label it with",
        examples: ExamplePair {
            before: r#"apiVersion: v1
kind: Namespace
metadata:
  name: legacy-ci
  labels:
    security.openshift.io/scc.podSecurityLabelSync: "false""#,
            after: r#"apiVersion: v1
kind: Namespace
metadata:
  name: legacy-ci
  labels:
    security.openshift.io/scc.podSecurityLabelSync: "true""#,
        },
    }
}
