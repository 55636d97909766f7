//! Audit state snapshot.

use serde::{Deserialize, Serialize};

use a11ylens_core::AuditReport;

/// Snapshot of the store's single-slot state.
///
/// `is_loading` and `error` are never both set: a new command clears the
/// error before its request goes out, and an error is only written once
/// loading has finished.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditState {
    /// Last successfully completed audit, replaced whole on each success.
    pub current_report: Option<AuditReport>,
    /// True exactly while the newest audit command is outstanding.
    pub is_loading: bool,
    /// Message from the most recent failed command.
    pub error: Option<String>,
}

impl AuditState {
    /// The logical phase of the most recent command.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.current_report.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }
}

/// Logical phase of the most recent audit command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No command issued yet (or error dismissed with no prior report).
    Idle,
    /// A command's collaborator call is outstanding.
    Loading,
    /// The newest command completed with a report.
    Success,
    /// The newest command failed.
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11ylens_core::AuditReport;

    #[test]
    fn test_default_is_idle() {
        let state = AuditState::default();
        assert!(state.current_report.is_none());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_phase_precedence() {
        let loading = AuditState {
            current_report: Some(AuditReport::new("https://example.test", 90)),
            is_loading: true,
            error: None,
        };
        assert_eq!(loading.phase(), Phase::Loading);

        // A stale report alongside a fresh error reads as Error.
        let errored = AuditState {
            current_report: Some(AuditReport::new("https://example.test", 90)),
            is_loading: false,
            error: Some("boom".to_string()),
        };
        assert_eq!(errored.phase(), Phase::Error);

        let succeeded = AuditState {
            current_report: Some(AuditReport::new("https://example.test", 90)),
            is_loading: false,
            error: None,
        };
        assert_eq!(succeeded.phase(), Phase::Success);
    }
}
