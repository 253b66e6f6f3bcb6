use anyhow::Context;
use psready_types::{PsreadyReport, ReadinessStatus, SCHEMA_REPORT_V1};

pub fn parse_report_json(text: &str) -> anyhow::Result<PsreadyReport> {
    let report: PsreadyReport = serde_json::from_str(text).context("parse psready report")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {}", report.schema);
    }
    Ok(report)
}

pub fn serialize_report(report: &PsreadyReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn serialize_status(status: &ReadinessStatus) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(status).context("serialize status")
}
