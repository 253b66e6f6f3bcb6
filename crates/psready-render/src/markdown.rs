use psready_types::{ConditionStatus, PsreadyReport, Verdict};

pub fn render_markdown(report: &PsreadyReport) -> String {
    let mut out = String::new();

    out.push_str("# Pod security readiness report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Namespaces scanned: {}\n- Violations: {} (customer {}, openshift {}, run-level zero {}, disabled syncer {})\n\n",
        verdict,
        report.data.namespaces_scanned,
        report.data.violations_total,
        report.data.customer,
        report.data.openshift,
        report.data.run_level_zero,
        report.data.disabled_syncer
    ));

    out.push_str("## Conditions\n\n");

    for condition in &report.conditions {
        let status = match condition.status {
            ConditionStatus::True => "True",
            ConditionStatus::False => "False",
        };
        if condition.message.is_empty() {
            out.push_str(&format!(
                "- [{}] `{}` ({})\n",
                status, condition.condition_type, condition.reason
            ));
        } else {
            out.push_str(&format!(
                "- [{}] `{}` ({}) — {}\n",
                status, condition.condition_type, condition.reason, condition.message
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use psready_types::{Condition, PsreadyData, ReportEnvelope, ToolMeta, SCHEMA_REPORT_V1};
    use time::macros::datetime;

    fn report(verdict: Verdict, conditions: Vec<Condition>, data: PsreadyData) -> PsreadyReport {
        ReportEnvelope {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "psready".to_string(),
                version: "0.0.0-test".to_string(),
            },
            started_at: datetime!(2025-06-01 12:00 UTC),
            finished_at: datetime!(2025-06-01 12:00 UTC),
            verdict,
            conditions,
            data,
        }
    }

    #[test]
    fn renders_passing_report() {
        let conditions = vec![Condition {
            condition_type: "PodSecurityCustomerEvaluationConditionsDetected".to_string(),
            status: ConditionStatus::False,
            reason: "ExpectedReason".to_string(),
            message: String::new(),
            last_transition_time: datetime!(2025-06-01 12:00 UTC),
        }];
        let md = render_markdown(&report(Verdict::Pass, conditions, PsreadyData::default()));

        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("## Conditions"));
        assert!(md.contains("[False] `PodSecurityCustomerEvaluationConditionsDetected` (ExpectedReason)"));
    }

    #[test]
    fn renders_violation_message_and_counts() {
        let conditions = vec![Condition {
            condition_type: "PodSecurityCustomerEvaluationConditionsDetected".to_string(),
            status: ConditionStatus::True,
            reason: "PSViolationsDetected".to_string(),
            message: "Violations detected in namespaces: [a b]".to_string(),
            last_transition_time: datetime!(2025-06-01 12:00 UTC),
        }];
        let data = PsreadyData {
            format: "descriptors".to_string(),
            namespaces_scanned: 2,
            violations_total: 2,
            customer: 2,
            ..PsreadyData::default()
        };
        let md = render_markdown(&report(Verdict::Fail, conditions, data));

        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("Namespaces scanned: 2"));
        assert!(md.contains("Violations: 2 (customer 2, openshift 0, run-level zero 0, disabled syncer 0)"));
        assert!(md.contains("— Violations detected in namespaces: [a b]"));
    }
}
