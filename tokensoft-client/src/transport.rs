//! HTTP transport capability.

use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// An outgoing POST: headers plus the raw JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// A JSON request with only the `Content-Type` header set.
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.into(),
        }
    }

    /// Appends a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Returns the first value of header `name` (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Performs a POST and decodes the reply body as JSON.
///
/// Implementations must not interpret the body; error envelopes are returned
/// like any other reply.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, request: HttpRequest) -> ClientResult<Value>;
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the given request timeout.
    pub fn new(timeout: Duration) -> ClientResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(&self, url: &str, request: HttpRequest) -> ClientResult<Value> {
        let mut builder = self.client.post(url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        debug!("POST {} -> {}", url, status);

        response.json::<Value>().await.map_err(|e| {
            ClientError::Transport(format!("invalid JSON in {status} response from {url}: {e}"))
        })
    }
}
