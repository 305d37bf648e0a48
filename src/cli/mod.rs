//! Host-facing command-line glue.
//!
//! Parses and validates the raw parameter bundle, enforces the boundary
//! contracts the core does not (the `create = false` existence check, the
//! value requirement for making a key present), runs the edit, and shapes
//! the machine-readable report for the invoking process.

mod args;
mod report;
mod run;

#[cfg(test)]
mod tests;

pub use args::CliArgs;
pub use report::{FailureReport, Report};
pub use run::run;
