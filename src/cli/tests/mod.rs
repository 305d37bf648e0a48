//! Unit tests for the CLI glue.
//!
//! Validation that needs no filesystem, plus the report shapes. The
//! `create = false` boundary needs a real (missing) file and lives in the
//! integration suite.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::path::PathBuf;

use crate::{
    TomlsetError,
    cli::{CliArgs, FailureReport, Report, run},
    reconcile::{DesiredState, Outcome},
};

fn args(path: &str) -> CliArgs {
    CliArgs {
        path: PathBuf::from(path),
        section: None,
        key: None,
        value: None,
        state: DesiredState::Present,
        create: true,
        check: false,
    }
}

#[test]
fn present_key_without_value_is_rejected() {
    let mut cli = args("unused.toml");
    cli.section = Some("drinks".to_string());
    cli.key = Some("fav".to_string());
    cli.check = true;

    let result = run(&cli);

    match result {
        Err(TomlsetError::InvalidRequest(reason)) => {
            assert!(reason.contains("value"));
        }
        other => panic!("expected InvalidRequest, got {other:?}"),
    }
}

#[test]
fn absent_key_without_value_is_accepted() {
    let mut cli = args("unused.toml");
    cli.key = Some("fav".to_string());
    cli.state = DesiredState::Absent;
    cli.check = true;

    // Missing file, absent state: a well-formed no-op.
    let report = run(&cli).unwrap();
    assert!(!report.changed);
}

#[test]
fn report_serializes_the_boundary_contract() {
    let mut outcome = Outcome::default();
    outcome.record("Added section drinks.".to_string());
    outcome.record("Added key fav=lemonade.".to_string());

    let report = Report::from_outcome(&outcome);

    assert_eq!(
        report.to_json(),
        "{\"changed\":true,\"original_message\":\"\",\
         \"message\":\"Added section drinks. Added key fav=lemonade.\"}"
    );
}

#[test]
fn empty_outcome_reports_unchanged() {
    let report = Report::from_outcome(&Outcome::default());

    assert!(!report.changed);
    assert!(report.message.is_empty());
}

#[test]
fn failure_report_carries_message_and_trace() {
    let error = TomlsetError::InvalidRequest("broken".to_string());
    let report = FailureReport::from_error(&error);

    assert!(report.failed);
    assert_eq!(report.msg, "invalid request: broken");
    assert!(report.traceback.contains("InvalidRequest"));

    let json = report.to_json();
    assert!(json.contains("\"failed\":true"));
}
