use tracing::debug;

use super::{args::CliArgs, report::Report};
use crate::{
    Result, TomlsetError, editor,
    reconcile::{DesiredState, Request},
};

/// Validates the raw arguments, runs the edit, and assembles the report.
///
/// # Errors
///
/// Returns [`TomlsetError::InvalidRequest`] if the arguments fail boundary
/// validation, or whatever [`editor::apply`] reports for the edit itself.
pub fn run(args: &CliArgs) -> Result<Report> {
    let request = validate(args)?;

    debug!(
        "running request against '{}' (check: {})",
        request.path.display(),
        args.check
    );
    let outcome = editor::apply(&request, args.check)?;

    Ok(Report::from_outcome(&outcome))
}

/// Boundary validation the core deliberately does not repeat.
fn validate(args: &CliArgs) -> Result<Request> {
    if !args.create && !args.path.exists() {
        return Err(TomlsetError::InvalidRequest(format!(
            "'{}' does not exist and create is disabled",
            args.path.display()
        )));
    }

    if args.state == DesiredState::Present && args.key.is_some() && args.value.is_none() {
        return Err(TomlsetError::InvalidRequest(
            "a value is required to make a key present".to_string(),
        ));
    }

    Ok(Request {
        path: args.path.clone(),
        section: args.section.clone(),
        key: args.key.clone(),
        value: args.value.clone(),
        state: args.state,
        create: args.create,
    })
}
