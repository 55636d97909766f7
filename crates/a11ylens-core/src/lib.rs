//! A11ylens Core - Shared accessibility report model.
//!
//! This crate provides:
//! - The audit report produced by an analysis backend
//! - Issue and severity types for individual findings
//! - The document kind tag for non-HTML audit targets
//!
//! The types here are passive data. Fetching and orchestration live in
//! `a11ylens-client` and `a11ylens-store`.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod report;

pub use report::{AuditIssue, AuditReport, DocumentKind, Severity};
