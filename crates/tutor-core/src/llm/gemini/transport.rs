//! HTTP transport for a single `generateContent` call

use super::request::GenerateContentRequest;
use super::sanitize::sanitize_provider_error_text;
use crate::error::TutorResult;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::instrument;

/// Public Gemini model endpoint root
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Status and raw body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

impl TransportReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The exchange did not complete (connection, DNS, TLS, timeout)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {message}")]
pub struct TransportError {
    pub message: String,
    pub timed_out: bool,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            timed_out: err.is_timeout(),
            message: err.without_url().to_string(),
        }
    }
}

/// Sends one request to one model
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelTransport: Send + Sync {
    async fn send(
        &self,
        model: &str,
        credential: &str,
        request: &GenerateContentRequest,
    ) -> Result<TransportReply, TransportError>;
}

/// reqwest-backed transport against the Gemini REST API
#[derive(Debug, Clone)]
pub struct GeminiTransport {
    base_url: String,
    http_client: Client,
}

impl GeminiTransport {
    /// Transport with its own client and per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> TutorResult<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, http_client))
    }

    pub fn with_client(base_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    /// `{base}/{model}:generateContent`
    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl ModelTransport for GeminiTransport {
    #[instrument(skip(self, credential, request), level = "debug")]
    async fn send(
        &self,
        model: &str,
        credential: &str,
        request: &GenerateContentRequest,
    ) -> Result<TransportReply, TransportError> {
        let response = self
            .http_client
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, credential)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            tracing::debug!(
                status,
                body = %sanitize_provider_error_text(&body),
                "model service returned an error status"
            );
        }

        Ok(TransportReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_format() {
        let transport = GeminiTransport::new(DEFAULT_BASE_URL, Duration::from_secs(5)).unwrap();
        assert_eq!(
            transport.endpoint("gemini-2.0-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );

        let transport = GeminiTransport::with_client("http://localhost:9000/models/", Client::new());
        assert_eq!(
            transport.endpoint("m"),
            "http://localhost:9000/models/m:generateContent"
        );
    }

    #[test]
    fn test_reply_success_range() {
        assert!(TransportReply::new(200, "").is_success());
        assert!(TransportReply::new(204, "").is_success());
        assert!(!TransportReply::new(429, "").is_success());
    }
}
