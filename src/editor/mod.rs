//! One-shot edit orchestration: load, reconcile, persist.
//!
//! Ties the document store and the reconciler together and owns the
//! atomic-write discipline. Everything runs sequentially within one
//! invocation; there is no mutual exclusion across concurrent invocations
//! against the same path. Two racing runs both load, and the last atomic
//! replace wins. Callers needing multi-writer safety must serialize
//! invocations externally.

use std::{fs, path::Path};

use tracing::{debug, info};

use crate::{
    Result, TomlsetError,
    document::Document,
    reconcile::{Outcome, Request, reconcile},
};

/// Brings the file named by `request` into the requested state.
///
/// Loads the current document (empty if the file is missing), reconciles it
/// against the request, and persists the result atomically, but only when
/// something changed and `dry_run` is false. A dry run performs the exact
/// same computation and suppresses persistence entirely.
///
/// # Errors
///
/// Returns [`TomlsetError::Io`] or [`TomlsetError::Decode`] if the file
/// cannot be read or parsed (no mutation is attempted), and
/// [`TomlsetError::Persistence`] if writing the result fails (the target
/// file's prior content is intact).
pub fn apply(request: &Request, dry_run: bool) -> Result<Outcome> {
    let mut doc = Document::load(&request.path)?;
    let outcome = reconcile(&mut doc, request);

    if outcome.changed && !dry_run {
        persist(&doc, &request.path)?;
        info!("updated '{}': {}", request.path.display(), outcome.message());
    } else {
        debug!(
            "no write for '{}' (changed: {}, dry_run: {dry_run})",
            request.path.display(),
            outcome.changed
        );
    }

    Ok(outcome)
}

/// Serializes `doc` and atomically replaces `path` with it.
///
/// The document is written to a temporary sibling file (same directory, so
/// the rename cannot cross filesystems) which is then renamed over the
/// target. A concurrent reader observes either the old complete file or the
/// new complete file, never a partial write. On failure the temporary file
/// is left in place for diagnosis and the target is untouched.
///
/// # Errors
///
/// Returns [`TomlsetError::Persistence`] if serialization, the temporary
/// write, or the rename fails.
pub fn persist(doc: &Document, path: &Path) -> Result<()> {
    let rendered = doc.to_toml_string(path)?;
    let temp_path = path.with_extension("tmp");

    debug!("writing '{}'", temp_path.display());
    fs::write(&temp_path, rendered).map_err(|e| TomlsetError::Persistence {
        path: temp_path.clone(),
        details: e.to_string(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| TomlsetError::Persistence {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}
