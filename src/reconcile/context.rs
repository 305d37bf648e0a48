use toml::{Table, Value};

/// The key/value scope a key-level operation targets.
///
/// Abstracts over the document's top-level entries and a named section with
/// one get/set/remove contract. A detached context carries no scope at all
/// (the addressed section does not exist and must not be created) and turns
/// every key operation into a no-op.
pub(crate) struct WorkingContext<'a> {
    entries: Option<&'a mut Table>,
}

impl<'a> WorkingContext<'a> {
    /// A context over an existing scope (top-level or section).
    pub(crate) fn over(entries: &'a mut Table) -> Self {
        Self {
            entries: Some(entries),
        }
    }

    /// A context with no scope; key operations do nothing.
    pub(crate) fn detached() -> Self {
        Self { entries: None }
    }

    /// Current value of `key`, if the scope exists and holds it.
    pub(crate) fn get(&self, key: &str) -> Option<&Value> {
        self.entries.as_ref().and_then(|entries| entries.get(key))
    }

    /// Sets `key` to `value` if the scope exists.
    pub(crate) fn set(&mut self, key: &str, value: Value) {
        if let Some(entries) = self.entries.as_mut() {
            entries.insert(key.to_string(), value);
        }
    }

    /// Removes `key` from the scope, returning the previous value.
    pub(crate) fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries
            .as_mut()
            .and_then(|entries| entries.remove(key))
    }
}
