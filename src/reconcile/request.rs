use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Whether the addressed section or key should exist after the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DesiredState {
    /// The section/key must exist (created or updated as needed).
    #[default]
    Present,
    /// The section/key must not exist (removed if found).
    Absent,
}

/// A validated desired-state request against one TOML file.
///
/// `section` and `key` are each optional; their presence selects one of four
/// operating modes. Without a section, key operations target the document's
/// top-level entries. Without a key, the section-level action is the entire
/// effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Path of the TOML file to bring into the desired state.
    pub path: PathBuf,
    /// Section to operate in, or `None` for the top-level scope.
    pub section: Option<String>,
    /// Key to add or remove within the working context.
    pub key: Option<String>,
    /// Desired value for the key, or the removal guard in absent mode.
    pub value: Option<String>,
    /// Desired presence state.
    pub state: DesiredState,
    /// Whether a missing file may be created. Enforced by the caller before
    /// the core runs; the document store itself always accepts a missing
    /// file.
    pub create: bool,
}
