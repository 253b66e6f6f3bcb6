//! The `check` use case: evaluate a snapshot and produce a report.

use anyhow::Context;
use psready_domain::policy::FailOn;
use psready_domain::status::apply_condition_updates;
use psready_settings::{Overrides, ResolvedConfig};
use psready_snapshot::parse_snapshot;
use psready_types::{
    PsreadyData, PsreadyReport, ReadinessStatus, ReportEnvelope, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Snapshot file contents.
    pub snapshot_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Existing sink status to merge the conditions into, if any.
    /// An empty string counts as an empty status.
    pub status_text: Option<&'a str>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: PsreadyReport,
    /// The merged status, when `status_text` was supplied.
    pub status: Option<ReadinessStatus>,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, parse snapshot, evaluate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        psready_settings::PsreadyConfigV1::default()
    } else {
        psready_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = psready_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let parsed =
        parse_snapshot(input.snapshot_text, resolved.effective.format).context("parse snapshot")?;

    let outcome = psready_domain::evaluate(&parsed.snapshot, started_at);

    let status = match input.status_text {
        Some(text) => {
            let current: ReadinessStatus = if text.trim().is_empty() {
                ReadinessStatus::default()
            } else {
                serde_json::from_str(text).context("parse status")?
            };
            let merged = apply_condition_updates(&current, &outcome.to_condition_updates())
                .context("apply conditions to status")?;
            Some(merged)
        }
        None => None,
    };

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "psready".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: outcome.verdict,
        conditions: outcome.conditions,
        data: PsreadyData {
            format: parsed.format.as_str().to_string(),
            namespaces_scanned: outcome.namespaces_scanned,
            violations_total: outcome.counts.total(),
            customer: outcome.counts.customer,
            openshift: outcome.counts.openshift,
            run_level_zero: outcome.counts.run_level_zero,
            disabled_syncer: outcome.counts.disabled_syncer,
        },
    };

    Ok(CheckOutput {
        report,
        status,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass (or `fail_on = never`), 2 = fail.
pub fn verdict_exit_code(verdict: Verdict, fail_on: FailOn) -> i32 {
    match (verdict, fail_on) {
        (Verdict::Fail, FailOn::Violations) => 2,
        _ => 0,
    }
}
