//! Transport seam and the inference client built on it.

pub mod http;
pub mod hugging_face;

pub use hugging_face::{EndpointTemplate, InferenceClient, DEFAULT_ENDPOINT};

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::error::Result;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs one POST of a JSON body. Implemented over reqwest in production
/// and by stubs in tests.
#[async_trait]
pub trait InferenceTransport: Send + Sync {
    /// Send `body` to `url`. A response with any status is `Ok`; only failures
    /// to complete the exchange are `Err`.
    async fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &serde_json::Value,
    ) -> Result<TransportResponse>;
}

/// Transport over a reqwest client, the shared one unless given another.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::with_client(http::shared_client().clone())
    }
}

#[async_trait]
impl InferenceTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &serde_json::Value,
    ) -> Result<TransportResponse> {
        let resp = self
            .client
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(http::transport_error)?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(http::transport_error)?;
        Ok(TransportResponse { status, body })
    }
}
