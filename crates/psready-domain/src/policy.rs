/// Snapshot input format the harness feeds the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// Sniff the JSON shape: top-level array = descriptors, object = namespace list.
    Auto,
    Descriptors,
    NamespaceList,
}

impl SnapshotFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            SnapshotFormat::Auto => "auto",
            SnapshotFormat::Descriptors => "descriptors",
            SnapshotFormat::NamespaceList => "namespace-list",
        }
    }
}

/// When a failing verdict should fail the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Violations,
    Never,
}

/// Resolved configuration one evaluation run operates under.
///
/// The classification constants themselves (run-level-zero set, opt-out
/// label) are deliberately not in here; they are fixed in `psready-types`.
#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub fail_on: FailOn,
    pub format: SnapshotFormat,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        EffectiveConfig {
            fail_on: FailOn::Violations,
            format: SnapshotFormat::Auto,
        }
    }
}
