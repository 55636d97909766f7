//! HTTP analysis backend implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use url::Url;

use a11ylens_core::{AuditReport, DocumentKind};

use crate::error::{ServiceError, ServiceResult};
use crate::service::{AuditService, ServiceConfig};

/// HTTP-backed audit service.
///
/// Talks JSON to a remote analysis endpoint:
/// `POST {endpoint}/analyze/page` and `POST {endpoint}/analyze/document`.
pub struct HttpAuditService {
    client: Client,
    config: ServiceConfig,
}

#[derive(Serialize)]
struct PageRequest<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct DocumentRequest<'a> {
    url: &'a str,
    kind: DocumentKind,
}

/// Error body the analysis API returns on failure. The `message` field is
/// optional on the wire.
#[derive(Deserialize)]
struct ApiError {
    message: Option<String>,
}

impl HttpAuditService {
    /// Create a new HTTP audit service.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Config`] if the endpoint is not a valid URL,
    /// and [`ServiceError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ServiceConfig) -> ServiceResult<Self> {
        Url::parse(&config.endpoint)
            .map_err(|e| ServiceError::Config(format!("invalid endpoint: {e}")))?;

        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn route(&self, path: &str) -> String {
        format!("{}/{path}", self.config.endpoint.trim_end_matches('/'))
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> ServiceResult<AuditReport> {
        let url = self.route(path);
        debug!(%url, "Sending analysis request");

        let mut request = self.client.post(&url).json(body);
        if !self.config.api_key.is_empty() {
            let mut header = reqwest::header::HeaderValue::try_from(&self.config.api_key)
                .map_err(|e| ServiceError::Config(format!("invalid API key characters: {e}")))?;
            header.set_sensitive(true);
            request = request.header("x-api-key", header);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Analysis API error");

            // The API's failure detail is optional; absence propagates as-is
            // so callers can apply their own fallback text.
            let message = serde_json::from_str::<ApiError>(&body)
                .ok()
                .and_then(|e| e.message);
            return Err(ServiceError::Rejected { message });
        }

        response
            .json::<AuditReport>()
            .await
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl AuditService for HttpAuditService {
    async fn analyze_web_page(&self, url: &str) -> ServiceResult<AuditReport> {
        self.post("analyze/page", &PageRequest { url }).await
    }

    async fn analyze_document(
        &self,
        url: &str,
        kind: DocumentKind,
    ) -> ServiceResult<AuditReport> {
        self.post("analyze/document", &DocumentRequest { url, kind })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_rejects_invalid_endpoint() {
        let err = HttpAuditService::new(ServiceConfig::new("not a url")).err();
        assert!(matches!(err, Some(ServiceError::Config(_))));
    }

    #[test]
    fn test_route_handles_trailing_slash() {
        let service = HttpAuditService::new(
            ServiceConfig::new("https://audit.example.test/v1/").timeout(Duration::from_secs(5)),
        )
        .unwrap();
        assert_eq!(
            service.route("analyze/page"),
            "https://audit.example.test/v1/analyze/page"
        );
    }

    #[test]
    fn test_error_body_message_is_optional() {
        let with: ApiError = serde_json::from_str(r#"{"message":"too large"}"#).unwrap();
        assert_eq!(with.message.as_deref(), Some("too large"));

        let without: ApiError = serde_json::from_str("{}").unwrap();
        assert!(without.message.is_none());
    }
}
