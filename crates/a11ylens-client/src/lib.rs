//! A11ylens Client - Analysis service client for a11ylens.
//!
//! This crate provides:
//! - The `AuditService` trait every analysis backend implements
//! - A tagged error type carrying the service's optional failure detail
//! - An HTTP implementation against a remote analysis endpoint
//!
//! # Architecture
//!
//! Consumers depend on the two-method `AuditService` contract and never on
//! a concrete backend. The store in `a11ylens-store` takes any
//! implementation, so tests inject doubles and production wires in
//! `HttpAuditService`.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod http;
mod service;

pub use error::{ServiceError, ServiceResult};
pub use http::HttpAuditService;
pub use service::{AuditService, ServiceConfig};
