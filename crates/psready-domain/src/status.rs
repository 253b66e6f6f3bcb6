//! Applying rendered conditions to a sink status value.
//!
//! The merge is a functional update: old status in, new status plus an
//! explicit error out. Transition-time bookkeeping stays here so the engine
//! never decides whether a timestamp changes.

use psready_types::{Condition, ReadinessStatus};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    /// The status already violates upsert-by-type: the same condition type
    /// appears more than once.
    #[error("status holds {count} conditions of type {condition_type}")]
    DuplicateConditionType {
        condition_type: String,
        count: usize,
    },
}

/// One idempotent "apply condition to status" operation.
#[derive(Clone, Debug)]
pub struct ConditionUpdate {
    condition: Condition,
}

impl ConditionUpdate {
    pub fn new(condition: Condition) -> Self {
        ConditionUpdate { condition }
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Upsert the condition into `status` by type and return the merged status.
    ///
    /// When the stored condition already has the same status value, its prior
    /// transition time is preserved; otherwise the rendered one is kept.
    pub fn apply(&self, status: &ReadinessStatus) -> Result<ReadinessStatus, StatusError> {
        let mut merged = status.clone();
        upsert_condition(&mut merged, self.condition.clone())?;
        Ok(merged)
    }
}

/// Apply several updates in order, stopping at the first error.
pub fn apply_condition_updates(
    status: &ReadinessStatus,
    updates: &[ConditionUpdate],
) -> Result<ReadinessStatus, StatusError> {
    let mut merged = status.clone();
    for update in updates {
        upsert_condition(&mut merged, update.condition.clone())?;
    }
    Ok(merged)
}

fn upsert_condition(
    status: &mut ReadinessStatus,
    mut condition: Condition,
) -> Result<(), StatusError> {
    let mut existing = status
        .conditions
        .iter()
        .enumerate()
        .filter(|(_, c)| c.condition_type == condition.condition_type);

    let Some((index, stored)) = existing.next() else {
        status.conditions.push(condition);
        return Ok(());
    };

    let duplicates = existing.count();
    if duplicates > 0 {
        return Err(StatusError::DuplicateConditionType {
            condition_type: condition.condition_type,
            count: duplicates + 1,
        });
    }

    if stored.status == condition.status {
        condition.last_transition_time = stored.last_transition_time;
    }
    status.conditions[index] = condition;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::make_condition;
    use psready_types::{ConditionKind, ConditionStatus};
    use time::macros::datetime;
    use time::OffsetDateTime;

    const T1: OffsetDateTime = datetime!(2025-06-01 12:00 UTC);
    const T2: OffsetDateTime = datetime!(2025-06-01 13:00 UTC);

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn missing_condition_is_appended() {
        let update = ConditionUpdate::new(make_condition(ConditionKind::Customer, &[], T1));
        let merged = update.apply(&ReadinessStatus::default()).unwrap();

        assert_eq!(merged.conditions.len(), 1);
        assert_eq!(merged.conditions[0].status, ConditionStatus::False);
    }

    #[test]
    fn unchanged_status_keeps_prior_transition_time() {
        let first = ConditionUpdate::new(make_condition(
            ConditionKind::Customer,
            &names(&["ns1"]),
            T1,
        ));
        let status = first.apply(&ReadinessStatus::default()).unwrap();

        let second = ConditionUpdate::new(make_condition(
            ConditionKind::Customer,
            &names(&["ns1", "ns2"]),
            T2,
        ));
        let merged = second.apply(&status).unwrap();

        assert_eq!(merged.conditions.len(), 1);
        assert_eq!(merged.conditions[0].last_transition_time, T1);
        assert_eq!(
            merged.conditions[0].message,
            "Violations detected in namespaces: [ns1 ns2]"
        );
    }

    #[test]
    fn changed_status_takes_new_transition_time() {
        let first = ConditionUpdate::new(make_condition(
            ConditionKind::Customer,
            &names(&["ns1"]),
            T1,
        ));
        let status = first.apply(&ReadinessStatus::default()).unwrap();

        let second = ConditionUpdate::new(make_condition(ConditionKind::Customer, &[], T2));
        let merged = second.apply(&status).unwrap();

        assert_eq!(merged.conditions[0].status, ConditionStatus::False);
        assert_eq!(merged.conditions[0].last_transition_time, T2);
    }

    #[test]
    fn foreign_condition_types_are_untouched() {
        let mut status = ReadinessStatus::default();
        status.conditions.push(Condition {
            condition_type: "SomethingElseDegraded".to_string(),
            status: ConditionStatus::True,
            reason: "Whatever".to_string(),
            message: String::new(),
            last_transition_time: T1,
        });

        let update = ConditionUpdate::new(make_condition(ConditionKind::Openshift, &[], T2));
        let merged = update.apply(&status).unwrap();

        assert_eq!(merged.conditions.len(), 2);
        assert_eq!(merged.conditions[0].condition_type, "SomethingElseDegraded");
    }

    #[test]
    fn duplicate_condition_type_is_an_error() {
        let mut status = ReadinessStatus::default();
        for _ in 0..2 {
            status
                .conditions
                .push(make_condition(ConditionKind::Customer, &[], T1));
        }

        let update = ConditionUpdate::new(make_condition(ConditionKind::Customer, &[], T2));
        let err = update.apply(&status).unwrap_err();

        assert_eq!(
            err,
            StatusError::DuplicateConditionType {
                condition_type: psready_types::ids::CONDITION_CUSTOMER.to_string(),
                count: 2,
            }
        );
    }

    #[test]
    fn apply_is_functional_and_leaves_input_alone() {
        let status = ReadinessStatus::default();
        let update = ConditionUpdate::new(make_condition(ConditionKind::Customer, &[], T1));
        let _ = update.apply(&status).unwrap();
        assert!(status.conditions.is_empty());
    }
}
