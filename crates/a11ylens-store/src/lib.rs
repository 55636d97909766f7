//! A11ylens Store - Reactive audit state for UI frontends.
//!
//! This crate provides:
//! - `AuditStore`, the state container driving audit requests
//! - Snapshot types describing the current audit phase
//! - Publish/subscribe delivery of every state change
//!
//! # Architecture
//!
//! The store owns a single-slot [`AuditState`] and an injected
//! [`a11ylens_client::AuditService`]. Each audit command performs two
//! commits: one entering the loading phase, one with the terminal result.
//! Every commit is delivered to all subscribers. There are two ways to
//! observe:
//!
//! 1. **Async receivers**: Use `store.subscribe()` to get a
//!    [`StateReceiver`] that can be polled asynchronously.
//!
//! 2. **Synchronous subscribers**: Register implementations of
//!    [`StateSubscriber`] with the registry for immediate callback-based
//!    notification at the moment a commit lands.
//!
//! Collaborator failures never surface to the caller; they are absorbed
//! into the state's `error` field and rendered from there.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod state;
mod store;
mod subscriber;

pub use state::{AuditState, Phase};
pub use store::{
    AuditStore, DEFAULT_CHANNEL_CAPACITY, DOCUMENT_FALLBACK, StateReceiver, URL_FALLBACK,
};
pub use subscriber::{FnSubscriber, StateSubscriber, SubscriberId, SubscriberRegistry};
