//! Desired-state reconciliation for TOML documents.
//!
//! The reconciler is a pure decision table: given a [`Request`] and a loaded
//! [`crate::document::Document`], it applies the minimal in-memory mutation
//! and reports what changed. It performs no I/O; persistence belongs to
//! [`crate::editor`].

mod context;
mod outcome;
mod reconciler;
mod request;


pub use outcome::Outcome;
pub use reconciler::reconcile;
pub use request::{DesiredState, Request};
