//! Synchronous state subscribers.
//!
//! Callback-based observers notified at the moment each commit lands,
//! before control returns to the command that mutated the state.

use dashmap::DashMap;
use tracing::trace;
use uuid::Uuid;

use std::sync::Arc;

use crate::state::AuditState;

/// Identifier for a registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(Uuid);

impl SubscriberId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Synchronous observer of state commits.
///
/// `on_state` runs on the task that performed the commit, while the
/// store's state lock is held. Keep it cheap, never block in it, and
/// never call back into the store from it.
pub trait StateSubscriber: Send + Sync {
    /// Called with the full snapshot after every commit.
    fn on_state(&self, state: &AuditState);
}

/// Registry of synchronous subscribers.
#[derive(Debug, Default)]
pub struct SubscriberRegistry {
    subscribers: DashMap<SubscriberId, Arc<dyn StateSubscriber>>,
}

impl std::fmt::Debug for dyn StateSubscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StateSubscriber")
    }
}

impl SubscriberRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber, returning its id for later removal.
    pub fn register(&self, subscriber: Arc<dyn StateSubscriber>) -> SubscriberId {
        let id = SubscriberId::new();
        self.subscribers.insert(id, subscriber);
        trace!(?id, "State subscriber registered");
        id
    }

    /// Remove a subscriber. Returns true if it was registered.
    pub fn unregister(&self, id: SubscriberId) -> bool {
        let removed = self.subscribers.remove(&id).is_some();
        trace!(?id, removed, "State subscriber unregistered");
        removed
    }

    /// Deliver a snapshot to every subscriber. Order is unspecified.
    pub fn notify(&self, state: &AuditState) {
        for entry in self.subscribers.iter() {
            entry.value().on_state(state);
        }
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

/// Subscriber backed by a closure.
pub struct FnSubscriber<F> {
    name: String,
    callback: F,
}

impl<F> FnSubscriber<F>
where
    F: Fn(&AuditState) + Send + Sync,
{
    /// Create a named closure subscriber. The name only shows up in logs.
    pub fn new(name: impl Into<String>, callback: F) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }
}

impl<F> StateSubscriber for FnSubscriber<F>
where
    F: Fn(&AuditState) + Send + Sync,
{
    fn on_state(&self, state: &AuditState) {
        trace!(subscriber = %self.name, "Notifying subscriber");
        (self.callback)(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_register_and_notify() {
        let registry = SubscriberRegistry::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);

        registry.register(Arc::new(FnSubscriber::new("counter", move |_| {
            seen_clone.fetch_add(1, Ordering::SeqCst);
        })));

        registry.notify(&AuditState::default());
        registry.notify(&AuditState::default());
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unregister_stops_delivery() {
        let registry = SubscriberRegistry::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);

        let id = registry.register(Arc::new(FnSubscriber::new("counter", move |_| {
            seen_clone.fetch_add(1, Ordering::SeqCst);
        })));
        assert_eq!(registry.len(), 1);

        assert!(registry.unregister(id));
        assert!(!registry.unregister(id));
        assert!(registry.is_empty());

        registry.notify(&AuditState::default());
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_all_subscribers_see_the_snapshot() {
        let registry = SubscriberRegistry::new();
        let total = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let total_clone = Arc::clone(&total);
            registry.register(Arc::new(FnSubscriber::new("recorder", move |state| {
                if state.is_loading {
                    total_clone.fetch_add(1, Ordering::SeqCst);
                }
            })));
        }

        let state = AuditState {
            is_loading: true,
            ..AuditState::default()
        };
        registry.notify(&state);
        assert_eq!(total.load(Ordering::SeqCst), 3);
    }
}
