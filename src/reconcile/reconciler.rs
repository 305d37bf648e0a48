use toml::Value;
use tracing::debug;

use super::{
    Outcome,
    context::WorkingContext,
    request::{DesiredState, Request},
};
use crate::document::Document;

/// Applies the minimal mutation for `request` against `doc`.
///
/// Pure in-memory reconciliation: the document is mutated in place and the
/// returned [`Outcome`] says whether anything changed. Applying the same
/// request a second time against the resulting document yields
/// `changed = false` and an identical document.
pub fn reconcile(doc: &mut Document, request: &Request) -> Outcome {
    let mut outcome = Outcome::default();

    // Resolve the scope to work in. Section-level mutations happen here;
    // everything after only touches keys inside the resolved scope.
    let mut context = match request.section.as_deref() {
        Some(section) => match request.state {
            DesiredState::Present => {
                if !doc.has_section(section) {
                    debug!("creating section '{section}'");
                    outcome.record(format!("Added section {section}."));
                }
                WorkingContext::over(doc.ensure_section(section))
            }
            DesiredState::Absent => {
                if request.key.is_some() {
                    // Removing a key never creates the section to hold it.
                    match doc.get_section_mut(section) {
                        Some(entries) => WorkingContext::over(entries),
                        None => WorkingContext::detached(),
                    }
                } else {
                    if doc.remove_section(section) {
                        debug!("removing section '{section}'");
                        outcome.record(format!("Removed section {section}."));
                    }
                    WorkingContext::detached()
                }
            }
        },
        None => WorkingContext::over(doc.top_level_mut()),
    };

    let Some(key) = request.key.as_deref() else {
        return outcome;
    };

    match request.state {
        DesiredState::Present => {
            let desired = request.value.as_deref().unwrap_or_default();
            let current = context.get(key).and_then(Value::as_str);

            // A current value of any non-string type never compares equal,
            // so it gets rewritten as the requested string.
            if current != Some(desired) {
                debug!("setting key '{key}'");
                context.set(key, Value::String(desired.to_string()));
                outcome.record(format!("Added key {key}={desired}."));
            }
        }
        DesiredState::Absent => {
            if context.get(key).is_some() {
                let removable = match request.value.as_deref() {
                    // No value supplied: remove unconditionally.
                    None => true,
                    // Value supplied: it guards the removal. A mismatch
                    // leaves the key untouched, with no change and no
                    // message.
                    Some(guard) => context.get(key).and_then(Value::as_str) == Some(guard),
                };

                if removable {
                    debug!("removing key '{key}'");
                    context.remove(key);
                    outcome.record(format!("Removed key {key}."));
                }
            }
        }
    }

    outcome
}
