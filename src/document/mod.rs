//! TOML document store.
//!
//! Bridges file bytes and the in-memory document: loading, section-level
//! access and mutation, and serialization back to TOML text. All key-level
//! mutation goes through [`crate::reconcile`]; this module never decides
//! *whether* to mutate, only *how*.

#[cfg(test)]
mod tests;

use std::{fs, path::Path};

use toml::{Table, Value};
use tracing::debug;

use crate::{Result, TomlsetError};

/// An in-memory TOML document.
///
/// An ordered mapping from section name to section, plus top-level key/value
/// entries that live outside any section. Section names and top-level keys
/// are unique within their scope, which the backing [`toml::Table`]
/// guarantees. Each invocation works on a fresh load/mutate/store cycle;
/// no document is cached across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Table,
}

impl Document {
    /// Loads a document from `path`.
    ///
    /// A missing file yields an empty document, equivalent to parsing an
    /// empty string. Whether a missing file is acceptable at all is the
    /// caller's contract (`create = false` is enforced before the store is
    /// invoked), not this store's.
    ///
    /// # Errors
    ///
    /// Returns [`TomlsetError::Io`] if the file exists but cannot be read,
    /// and [`TomlsetError::Decode`] if its contents are not valid TOML.
    pub fn load(path: &Path) -> Result<Document> {
        if !path.exists() {
            debug!("'{}' does not exist, starting from empty document", path.display());
            return Ok(Document::default());
        }

        let content = fs::read_to_string(path).map_err(|e| TomlsetError::Io {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Document::from_toml_str(&content, path)
    }

    /// Parses a document from TOML text, attributing errors to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TomlsetError::Decode`] if `content` is not valid TOML.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Document> {
        let root: Table = toml::from_str(content).map_err(|e| TomlsetError::decode(e, path))?;
        Ok(Document { root })
    }

    /// Returns the named section, if present.
    ///
    /// Never creates anything. An entry under `name` that is not a table
    /// does not count as a section.
    pub fn get_section(&self, name: &str) -> Option<&Table> {
        match self.root.get(name) {
            Some(Value::Table(table)) => Some(table),
            _ => None,
        }
    }

    /// Mutable access to the named section, if present.
    pub fn get_section_mut(&mut self, name: &str) -> Option<&mut Table> {
        match self.root.get_mut(name) {
            Some(Value::Table(table)) => Some(table),
            _ => None,
        }
    }

    /// Returns whether a section of the given name exists.
    pub fn has_section(&self, name: &str) -> bool {
        matches!(self.root.get(name), Some(Value::Table(_)))
    }

    /// Returns the named section, creating an empty one if needed.
    ///
    /// A non-table entry occupying the name is replaced by an empty table;
    /// the desired state is "a section exists here" and convergence wins
    /// over preserving a conflicting scalar.
    pub fn ensure_section(&mut self, name: &str) -> &mut Table {
        if !self.has_section(name) {
            self.root
                .insert(name.to_string(), Value::Table(Table::new()));
        }

        match self.root.get_mut(name) {
            Some(Value::Table(table)) => table,
            _ => unreachable!(),
        }
    }

    /// Removes the entry under `name`, returning whether it was present.
    pub fn remove_section(&mut self, name: &str) -> bool {
        self.root.remove(name).is_some()
    }

    /// The document's own top-level key/value scope.
    pub fn top_level_mut(&mut self) -> &mut Table {
        &mut self.root
    }

    /// Read access to the top-level scope.
    pub fn top_level(&self) -> &Table {
        &self.root
    }

    /// Renders the document back to TOML text.
    ///
    /// Round-trips values unchanged for any document produced through this
    /// store's own mutations. Comments and formatting of externally-crafted
    /// files are not preserved; that is a property of the serializer, not a
    /// contract of this store.
    ///
    /// # Errors
    ///
    /// Returns [`TomlsetError::Persistence`] if serialization fails.
    pub fn to_toml_string(&self, path: &Path) -> Result<String> {
        toml::to_string_pretty(&self.root).map_err(|e| TomlsetError::persistence(e, path))
    }
}
