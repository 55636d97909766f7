//! Audit service trait.
//!
//! Defines the two-method contract every analysis backend implements.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use a11ylens_core::{AuditReport, DocumentKind};

use crate::error::ServiceResult;

/// Audit service trait.
///
/// Implementors analyze a target and resolve with an [`AuditReport`] or
/// fail with a [`crate::ServiceError`].
#[async_trait]
pub trait AuditService: Send + Sync {
    /// Analyze a live web page.
    async fn analyze_web_page(&self, url: &str) -> ServiceResult<AuditReport>;

    /// Analyze a hosted document of the given kind.
    async fn analyze_document(
        &self,
        url: &str,
        kind: DocumentKind,
    ) -> ServiceResult<AuditReport>;
}

/// Blanket implementation allowing `Box<dyn AuditService>` to be used as
/// a type parameter wherever `S: AuditService` is required.
#[async_trait]
impl AuditService for Box<dyn AuditService> {
    async fn analyze_web_page(&self, url: &str) -> ServiceResult<AuditReport> {
        (**self).analyze_web_page(url).await
    }

    async fn analyze_document(
        &self,
        url: &str,
        kind: DocumentKind,
    ) -> ServiceResult<AuditReport> {
        (**self).analyze_document(url, kind).await
    }
}

/// Blanket implementation for shared services, so an `Arc<S>` handle can
/// be injected without wrapping.
#[async_trait]
impl<S: AuditService + ?Sized> AuditService for Arc<S> {
    async fn analyze_web_page(&self, url: &str) -> ServiceResult<AuditReport> {
        (**self).analyze_web_page(url).await
    }

    async fn analyze_document(
        &self,
        url: &str,
        kind: DocumentKind,
    ) -> ServiceResult<AuditReport> {
        (**self).analyze_document(url, kind).await
    }
}

/// Configuration for the HTTP analysis backend.
#[derive(Clone)]
pub struct ServiceConfig {
    /// Base endpoint of the analysis API.
    pub endpoint: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("endpoint", &self.endpoint)
            .field("has_api_key", &!self.api_key.is_empty())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ServiceConfig {
    /// Create a new config for the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: String::new(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_debug_redacts_key() {
        let config = ServiceConfig::new("https://audit.example.test").api_key("secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("has_api_key: true"));
    }
}
