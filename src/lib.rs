//! tomlset - idempotent, declarative editing of TOML configuration files.
//!
//! Given a target file, an optional section, an optional key, a desired
//! value, and a desired presence state, tomlset computes the minimal
//! mutation that brings the file into the requested state, applies it
//! atomically, and reports whether a change occurred. Repeated application
//! of the same request converges to a fixed point: the second run reports
//! `changed = false` and leaves the file bitwise identical.
//!
//! The crate splits into a pure core and thin I/O shells:
//!
//! - [`document`] loads, mutates, and serializes the TOML document
//! - [`reconcile`] is the pure decision table `(Document, Request) -> Outcome`
//! - [`editor`] orchestrates load, reconcile, and the atomic replace
//! - [`cli`] validates raw parameters and shapes the host-facing report
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tomlset::editor;
//! use tomlset::reconcile::{DesiredState, Request};
//!
//! let request = Request {
//!     path: "/etc/conf.toml".into(),
//!     section: Some("drinks".to_string()),
//!     key: Some("fav".to_string()),
//!     value: Some("lemonade".to_string()),
//!     state: DesiredState::Present,
//!     create: true,
//! };
//!
//! let outcome = editor::apply(&request, false)?;
//! println!("changed: {}", outcome.changed);
//! # Ok::<(), tomlset::TomlsetError>(())
//! ```

/// Core error types and result aliases.
pub mod core;

/// TOML document store: load, section access, serialization.
pub mod document;

/// Desired-state reconciliation over a loaded document.
pub mod reconcile;

/// Load/reconcile/persist orchestration with atomic replacement.
pub mod editor;

/// Command-line interface and host report shaping.
pub mod cli;

/// Tracing subscriber initialization.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{Result, TomlsetError};
