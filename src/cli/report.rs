use serde::Serialize;

use crate::{TomlsetError, reconcile::Outcome};

/// The JSON object reported to the invoking process on success.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Report {
    /// Whether the target file was (or, in check mode, would be) changed.
    pub changed: bool,
    /// Reserved field; always empty.
    pub original_message: String,
    /// Space-joined change descriptions, in the order they were produced.
    pub message: String,
}

impl Report {
    /// Builds the report for a finished reconciliation.
    pub fn from_outcome(outcome: &Outcome) -> Self {
        Report {
            changed: outcome.changed,
            original_message: String::new(),
            message: outcome.message(),
        }
    }

    /// Renders the report as a single JSON line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// The JSON object reported on fatal failure.
///
/// Accompanied by a non-zero exit status; the target file is guaranteed
/// untouched by the failed invocation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FailureReport {
    /// Always true; marks the invocation as failed.
    pub failed: bool,
    /// Human-readable failure message.
    pub msg: String,
    /// Diagnostic rendering of the underlying error.
    pub traceback: String,
}

impl FailureReport {
    /// Builds the failure report for a fatal error.
    pub fn from_error(error: &TomlsetError) -> Self {
        FailureReport {
            failed: true,
            msg: error.to_string(),
            traceback: format!("{error:?}"),
        }
    }

    /// Renders the report as a single JSON line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{\"failed\":true}".to_string())
    }
}
