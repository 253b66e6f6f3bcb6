use psready_types::{ids, Condition, ConditionKind, ConditionStatus};
use time::OffsetDateTime;

/// Render the condition for one bucket.
///
/// Names are sorted here rather than in the accumulator, so equal bucket
/// contents render the same message regardless of input order. The input
/// slice is left untouched.
pub fn make_condition(kind: ConditionKind, names: &[String], at: OffsetDateTime) -> Condition {
    if names.is_empty() {
        return Condition {
            condition_type: kind.as_str().to_string(),
            status: ConditionStatus::False,
            reason: ids::REASON_EXPECTED.to_string(),
            message: String::new(),
            last_transition_time: at,
        };
    }

    let mut sorted = names.to_vec();
    sorted.sort();

    Condition {
        condition_type: kind.as_str().to_string(),
        status: ConditionStatus::True,
        reason: ids::REASON_VIOLATIONS_DETECTED.to_string(),
        message: format!("Violations detected in namespaces: [{}]", sorted.join(" ")),
        last_transition_time: at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const AT: OffsetDateTime = datetime!(2025-06-01 12:00 UTC);

    #[test]
    fn with_namespaces() {
        let names = vec!["namespace1".to_string(), "namespace2".to_string()];
        let condition = make_condition(ConditionKind::Customer, &names, AT);

        assert_eq!(condition.condition_type, ids::CONDITION_CUSTOMER);
        assert_eq!(condition.status, ConditionStatus::True);
        assert_eq!(condition.reason, "PSViolationsDetected");
        assert_eq!(
            condition.message,
            "Violations detected in namespaces: [namespace1 namespace2]"
        );
        assert_eq!(condition.last_transition_time, AT);
    }

    #[test]
    fn without_namespaces() {
        let condition = make_condition(ConditionKind::Customer, &[], AT);

        assert_eq!(condition.condition_type, ids::CONDITION_CUSTOMER);
        assert_eq!(condition.status, ConditionStatus::False);
        assert_eq!(condition.reason, "ExpectedReason");
        assert_eq!(condition.message, "");
    }

    #[test]
    fn message_is_sorted_and_input_is_not_mutated() {
        let names = vec!["b".to_string(), "a".to_string()];
        let condition = make_condition(ConditionKind::Openshift, &names, AT);

        assert_eq!(condition.message, "Violations detected in namespaces: [a b]");
        assert_eq!(names, ["b", "a"]);

        let swapped = vec!["a".to_string(), "b".to_string()];
        let again = make_condition(ConditionKind::Openshift, &swapped, AT);
        assert_eq!(condition.message, again.message);
    }
}
