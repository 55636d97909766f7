//! Prelude module - commonly used types for convenient import.
//!
//! Use `use a11ylens_store::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust,no_run
//! use a11ylens_client::prelude::*;
//! use a11ylens_store::prelude::*;
//!
//! # async fn example() -> ServiceResult<()> {
//! let service = HttpAuditService::new(ServiceConfig::new("https://audit.example.test"))?;
//! let store = AuditStore::new(service);
//!
//! let mut changes = store.subscribe();
//! store.audit_url("https://example.test").await;
//!
//! while let Some(state) = changes.try_recv() {
//!     println!("phase: {:?}", state.phase());
//! }
//! # Ok(())
//! # }
//! ```

// Store and receivers
pub use crate::{AuditStore, StateReceiver};

// State snapshot
pub use crate::{AuditState, Phase};

// Synchronous subscribers
pub use crate::{FnSubscriber, StateSubscriber, SubscriberId, SubscriberRegistry};

// Re-exported model types the state exposes
pub use a11ylens_core::{AuditReport, DocumentKind};
