//! Prelude module - commonly used types for convenient import.
//!
//! Use `use a11ylens_core::prelude::*;` to import all essential types.

pub use crate::{AuditIssue, AuditReport, DocumentKind, Severity};
