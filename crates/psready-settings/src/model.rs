use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `psready.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. The classification rules themselves are not
/// configurable; only harness behavior is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PsreadyConfigV1 {
    /// Optional schema string for tooling (`psready.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// When to fail the run: `violations` (default) or `never`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// Snapshot input format: `auto` (default), `descriptors`, or `namespace-list`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}
