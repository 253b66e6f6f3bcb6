use crate::condition::Condition;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for psready reports.
pub const SCHEMA_REPORT_V1: &str = "psready.report.v1";

/// Aggregate verdict over one evaluation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Psready-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct PsreadyData {
    /// Snapshot input format that was parsed (`descriptors` or `namespace-list`).
    pub format: String,

    pub namespaces_scanned: u32,
    pub violations_total: u32,

    pub customer: u32,
    pub openshift: u32,
    pub run_level_zero: u32,
    pub disabled_syncer: u32,
}

/// A generic report envelope.
///
/// Keeping this generic allows psready to embed tool-specific data while still
/// enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = PsreadyData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    /// Exactly the four fixed conditions, in emission order.
    pub conditions: Vec<Condition>,
    pub data: TData,
}

pub type PsreadyReport = ReportEnvelope<PsreadyData>;
