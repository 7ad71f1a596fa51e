//! HTTP transport to the inference relay.
//!
//! One request per tick: the encoded frame goes out as JSON, a structured
//! risk payload comes back. Every failure mode ends up as a
//! [`TransportError`] for the tick handler to feed into the fallback
//! synthesizer; the error body of a non-success response is never read.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use dw_core::config::BackendSettings;
use dw_core::models::RiskPayload;

/// Errors from one frame submission.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network-level failure (connect, timeout, body read, decode).
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay answered with a non-success status.
    #[error("backend returned {0}")]
    Status(StatusCode),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Request body for frame submission.
#[derive(Debug, Serialize)]
struct FrameRequest<'a> {
    frame: &'a str,
}

/// Client for the frame-inference endpoint.
pub struct InferenceClient {
    http: Client,
    endpoint: String,
}

impl InferenceClient {
    /// Build a client from backend settings.
    pub fn new(settings: &BackendSettings) -> TransportResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("DriveWatch/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_millis(settings.request_timeout_ms))
            .build()?;
        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
        })
    }

    /// Create a client with a custom HTTP client (for testing with mockito).
    pub fn with_http_client(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Submit one encoded frame and decode the inference result.
    pub async fn submit(&self, frame_data_uri: &str) -> TransportResult<RiskPayload> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&FrameRequest {
                frame: frame_data_uri,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "backend rejected frame");
            return Err(TransportError::Status(status));
        }

        Ok(response.json().await?)
    }
}
