//! The `explain` use case: look up condition-type documentation.

use psready_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes the known condition types.
    NotFound {
        identifier: String,
        available_condition_types: &'static [&'static str],
    },
}

/// Look up an explanation for a condition type.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_condition_types: explain::all_condition_types(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before (counted):\n");
    out.push_str("```yaml\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After (resolved):\n");
    out.push_str("```yaml\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, condition_types: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown condition type: {}\n\n", identifier));
    out.push_str("Available condition types:\n");
    for condition_type in condition_types {
        out.push_str(&format!("  - {}\n", condition_type));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use psready_types::ids;

    #[test]
    fn explain_known_condition_type() {
        let output = run_explain(ids::CONDITION_DISABLED_SYNCER);
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_unknown() {
        let output = run_explain("not_a_real_thing");
        match output {
            ExplainOutput::NotFound {
                identifier,
                available_condition_types,
            } => {
                assert_eq!(identifier, "not_a_real_thing");
                assert_eq!(available_condition_types.len(), 4);
            }
            ExplainOutput::Found(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn format_explanation_output() {
        let ExplainOutput::Found(exp) = run_explain(ids::CONDITION_CUSTOMER) else {
            panic!("expected Found");
        };
        let formatted = format_explanation(&exp);
        assert!(formatted.contains("Remediation"));
        assert!(formatted.contains("Examples"));
        assert!(formatted.contains("```yaml"));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", explain::all_condition_types());
        assert!(formatted.contains("Unknown condition type: missing"));
        assert!(formatted.contains(ids::CONDITION_CUSTOMER));
        assert!(formatted.contains(ids::CONDITION_RUN_LEVEL_ZERO));
    }
}
