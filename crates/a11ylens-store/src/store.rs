//! Audit state store.
//!
//! Serializes UI-triggered audit requests into a two-commit transition
//! (loading, then terminal) and republishes the snapshot on every commit.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;
use tracing::{debug, trace, warn};

use a11ylens_client::{AuditService, ServiceError, ServiceResult};
use a11ylens_core::{AuditReport, DocumentKind};

use crate::state::AuditState;
use crate::subscriber::SubscriberRegistry;

/// Default channel capacity for async state receivers.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Error text for a page audit whose failure carried no detail.
pub const URL_FALLBACK: &str = "Failed to analyze URL";

/// Error text for a document audit whose failure carried no detail.
pub const DOCUMENT_FALLBACK: &str = "Failed to analyze document";

/// Reactive audit state store.
///
/// Holds the single-slot [`AuditState`] and the injected analysis backend.
/// Cloning the store is cheap and every clone shares the same state and
/// subscribers, so one handle can drive commands while others observe.
///
/// Commands never fail from the caller's point of view: collaborator
/// faults are absorbed into the `error` field at the command boundary and
/// the only way to observe them is through the state itself.
pub struct AuditStore<S> {
    service: Arc<S>,
    shared: Arc<Shared>,
}

struct Shared {
    state: RwLock<AuditState>,
    /// Sequence of the newest issued command. Completions carrying an
    /// older sequence are superseded and must not commit.
    seq: AtomicU64,
    sender: broadcast::Sender<Arc<AuditState>>,
    registry: SubscriberRegistry,
}

impl<S> Clone for AuditStore<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S: AuditService> AuditStore<S> {
    /// Create a store around the given analysis backend.
    #[must_use]
    pub fn new(service: S) -> Self {
        Self::with_capacity(service, DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a store with a specific async channel capacity.
    #[must_use]
    pub fn with_capacity(service: S, capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            service: Arc::new(service),
            shared: Arc::new(Shared {
                state: RwLock::new(AuditState::default()),
                seq: AtomicU64::new(0),
                sender,
                registry: SubscriberRegistry::new(),
            }),
        }
    }

    /// Audit a live web page.
    ///
    /// Commits the loading phase before the backend is called, then the
    /// terminal phase once it resolves. A failure leaves any previously
    /// completed report in place alongside the new error message.
    pub async fn audit_url(&self, url: impl Into<String>) {
        let url = url.into();
        let seq = self.begin();
        debug!(%url, seq, "Auditing web page");

        let result = self.service.analyze_web_page(&url).await;
        self.finish(seq, result, URL_FALLBACK);
    }

    /// Audit a hosted document, passing `kind` through to the backend.
    pub async fn audit_document(&self, url: impl Into<String>, kind: DocumentKind) {
        let url = url.into();
        let seq = self.begin();
        debug!(%url, %kind, seq, "Auditing document");

        let result = self.service.analyze_document(&url, kind).await;
        self.finish(seq, result, DOCUMENT_FALLBACK);
    }

    /// Dismiss the current error.
    ///
    /// Clears only the `error` field; `current_report` and `is_loading`
    /// are untouched regardless of phase.
    pub fn reset_error(&self) {
        trace!("Resetting error");
        self.commit(|state| {
            state.error = None;
        });
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> AuditState {
        self.shared
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Subscribe to state changes.
    ///
    /// Returns a receiver yielding a snapshot for every commit from this
    /// point on.
    #[must_use]
    pub fn subscribe(&self) -> StateReceiver {
        StateReceiver {
            receiver: self.shared.sender.subscribe(),
        }
    }

    /// Get the synchronous subscriber registry.
    ///
    /// Registered subscribers are invoked during commits, while the state
    /// lock is held; they must not call back into the store.
    #[must_use]
    pub fn registry(&self) -> &SubscriberRegistry {
        &self.shared.registry
    }

    /// Enter the loading phase and claim the next command sequence.
    ///
    /// The sequence is claimed under the state lock so claim order and
    /// commit order are the same order.
    fn begin(&self) -> u64 {
        let mut state = self
            .shared
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let seq = self.shared.seq.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        state.is_loading = true;
        state.error = None;
        self.publish(&state);
        seq
    }

    /// Commit the terminal phase for the command with sequence `seq`.
    ///
    /// A completion that is no longer the newest command is discarded
    /// whole: a later command owns the loading flag and will write its own
    /// terminal state. The staleness check happens under the state lock,
    /// so a concurrent `begin` cannot slip in between the check and the
    /// mutation.
    fn finish(&self, seq: u64, result: ServiceResult<AuditReport>, fallback: &str) {
        let mut state = self
            .shared
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if self.shared.seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "Discarding superseded audit result");
            return;
        }

        match result {
            Ok(report) => {
                debug!(seq, score = report.score, "Audit completed");
                state.current_report = Some(report);
                state.is_loading = false;
            },
            Err(err) => {
                warn!(seq, error = %err, "Audit failed");
                state.error = Some(display_error(&err, fallback));
                state.is_loading = false;
            },
        }
        self.publish(&state);
    }

    /// Mutate the state and publish the resulting snapshot.
    fn commit<F: FnOnce(&mut AuditState)>(&self, mutate: F) {
        let mut state = self
            .shared
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        mutate(&mut state);
        self.publish(&state);
    }

    /// Publish a snapshot. Callers hold the state write lock, so
    /// publication order always matches commit order. The broadcast goes
    /// out first (`send` never blocks) so async receivers are not delayed
    /// by synchronous subscribers.
    fn publish(&self, state: &AuditState) {
        let snapshot = Arc::new(state.clone());
        if self.shared.sender.send(Arc::clone(&snapshot)).is_err() {
            // No async receivers - this is fine
            trace!("No receivers for state change");
        }

        self.shared.registry.notify(&snapshot);
    }
}

/// Map a service failure to the text shown to the user.
///
/// The service's own detail wins verbatim when it exists; only an absent
/// detail falls back to the command-specific text.
fn display_error(err: &ServiceError, fallback: &str) -> String {
    err.message().unwrap_or_else(|| fallback.to_string())
}

/// Receiver for state snapshots from the store.
pub struct StateReceiver {
    receiver: broadcast::Receiver<Arc<AuditState>>,
}

impl StateReceiver {
    /// Receive the next snapshot.
    ///
    /// Returns `None` once the store is gone and the channel drained.
    pub async fn recv(&mut self) -> Option<Arc<AuditState>> {
        loop {
            match self.receiver.recv().await {
                Ok(state) => return Some(state),
                Err(broadcast::error::RecvError::Lagged(count)) => {
                    warn!(skipped = count, "State receiver lagged, snapshots dropped");
                    // Continue receiving
                },
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Try to receive the next snapshot without blocking.
    pub fn try_recv(&mut self) -> Option<Arc<AuditState>> {
        loop {
            match self.receiver.try_recv() {
                Ok(state) => return Some(state),
                Err(broadcast::error::TryRecvError::Lagged(count)) => {
                    warn!(skipped = count, "State receiver lagged, snapshots dropped");
                    // Continue receiving
                },
                Err(
                    broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Closed,
                ) => return None,
            }
        }
    }
}
