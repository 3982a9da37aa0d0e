//! HTTP fetcher for the published crawler IP ranges.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{MapError, Result};

/// Maximum accepted response size (10 MB)
/// The published Googlebot list is a few KB, so 10 MB is ample margin
const MAX_PAYLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Anything that can hand the pipeline a decoded JSON payload.
#[async_trait]
pub trait PayloadSource: Send + Sync {
    /// Retrieve and decode the document at `url`.
    async fn fetch_json(&self, url: &str) -> Result<Value>;
}

/// HTTP client for fetching the range list. One request per call, no retries.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher whose every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            // No proxy discovery from the environment
            .no_proxy()
            .user_agent(format!("googlebot-map/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MapError::Retrieval(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Download the raw body, enforcing status and size limits.
    ///
    /// The body is read chunk by chunk so the size cap also holds when the
    /// server sends no `Content-Length`.
    async fn fetch_body(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MapError::Retrieval(format!("Failed to fetch {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MapError::Retrieval(format!(
                "Failed to fetch {} (HTTP {})",
                url,
                status.as_u16()
            )));
        }

        if let Some(content_length) = response.content_length() {
            if content_length > MAX_PAYLOAD_SIZE as u64 {
                return Err(MapError::Retrieval(format!(
                    "Response too large: {} bytes (max: {} bytes)",
                    content_length, MAX_PAYLOAD_SIZE
                )));
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| {
            MapError::Retrieval(format!("Failed to read response body from {}: {}", url, e))
        })? {
            if body.len() + chunk.len() > MAX_PAYLOAD_SIZE {
                return Err(MapError::Retrieval(format!(
                    "Downloaded content too large: more than {} bytes",
                    MAX_PAYLOAD_SIZE
                )));
            }
            body.extend_from_slice(&chunk);
        }

        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[async_trait]
impl PayloadSource for Fetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        info!("Fetching {}...", url);
        let body = self.fetch_body(url).await?;
        parse_payload(url, &body)
    }
}

/// Decode a response body as JSON. Bytes that are not valid UTF-8 are an error.
pub fn parse_payload(url: &str, body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body)
        .map_err(|e| MapError::MalformedPayload(format!("Invalid JSON from {}: {}", url, e)))
}
