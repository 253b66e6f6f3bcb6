use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the psready binary.
#[allow(deprecated)]
fn psready_cmd() -> Command {
    Command::cargo_bin("psready").unwrap()
}

#[test]
fn help_works() {
    psready_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("explain"));
}

#[test]
fn explain_known_condition_type() {
    psready_cmd()
        .arg("explain")
        .arg("PodSecurityDisabledSyncerEvaluationConditionsDetected")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remediation"));
}

#[test]
fn explain_unknown_identifier_fails() {
    psready_cmd()
        .arg("explain")
        .arg("NotACondition")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown condition type"));
}
