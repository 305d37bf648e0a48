use std::path::PathBuf;

use clap::Parser;

use crate::reconcile::DesiredState;

/// Declarative, idempotent editing of TOML configuration files.
///
/// Brings one section or key of the target file into the requested presence
/// state, writes the file atomically only when something actually changed,
/// and prints a JSON report of the form
/// `{"changed": bool, "original_message": "", "message": "..."}` to stdout.
#[derive(Debug, Parser)]
#[command(name = "tomlset", version, about)]
pub struct CliArgs {
    /// Path to the TOML file. Created if missing, unless --create=false.
    pub path: PathBuf,

    /// Section to operate in. Top-level entries are used when omitted.
    #[arg(long)]
    pub section: Option<String>,

    /// Key to add or remove within the section (or the top level).
    #[arg(long)]
    pub key: Option<String>,

    /// Value for the key. In absent mode it guards the removal: the key is
    /// only removed if it currently holds exactly this value.
    #[arg(long)]
    pub value: Option<String>,

    /// Desired presence state of the addressed section or key.
    #[arg(long, value_enum, default_value = "present")]
    pub state: DesiredState,

    /// Whether a missing target file may be created.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub create: bool,

    /// Check mode: compute the outcome without writing anything.
    #[arg(long)]
    pub check: bool,
}
