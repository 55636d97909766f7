//! Service-related error types.

use thiserror::Error;

/// Errors that can occur when talking to an analysis backend.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service ran but rejected or failed the analysis.
    ///
    /// The message is the service's own human-readable detail. Backends
    /// are not required to provide one; callers that render errors fall
    /// back to their own text when it is absent.
    #[error("analysis rejected: {}", message.as_deref().unwrap_or("no detail provided"))]
    Rejected {
        /// Detail reported by the service, verbatim.
        message: Option<String>,
    },

    /// HTTP transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service responded but the payload did not parse.
    #[error("invalid service response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ServiceError {
    /// The human-readable detail this failure carries, if any.
    ///
    /// `Rejected` without a service-supplied message is the only variant
    /// with nothing to say; every other variant describes itself.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Rejected { message } => message.clone(),
            Self::Http(e) => Some(e.to_string()),
            Self::InvalidResponse(msg) | Self::Config(msg) => Some(msg.clone()),
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_verbatim() {
        let err = ServiceError::Rejected {
            message: Some("document is password protected".to_string()),
        };
        assert_eq!(
            err.message().as_deref(),
            Some("document is password protected")
        );
    }

    #[test]
    fn test_rejected_without_detail_has_no_message() {
        let err = ServiceError::Rejected { message: None };
        assert!(err.message().is_none());
        assert_eq!(err.to_string(), "analysis rejected: no detail provided");
    }

    #[test]
    fn test_empty_string_detail_is_preserved() {
        // An empty message is still a message; only absence means absence.
        let err = ServiceError::Rejected {
            message: Some(String::new()),
        };
        assert_eq!(err.message().as_deref(), Some(""));
    }
}
