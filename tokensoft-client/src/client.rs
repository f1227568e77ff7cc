//! The signed API client.

use crate::clock::{Clock, SystemClock};
use crate::config::{ClientConfig, ClientOptions};
use crate::error::{ClientError, ClientResult};
use crate::eth::{RestrictionChecker, TransferRestriction};
use crate::signer::RequestSigner;
use crate::time_sync::{TimeCache, TimeSync};
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::unwrap::unwrap_response;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tokensoft_types::{Response, ResponseData, Transaction};
use tracing::{debug, error};

const TIME_QUERY: &str = "{ time }";

/// A query or mutation with optional variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    #[must_use]
    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }
}

/// Client for the Tokensoft API.
///
/// Every call is signed with HMAC-SHA256 over the adjusted server time and
/// the request body. Server time is probed lazily and cached for
/// [`ClientConfig::max_time_cache_age_ms`].
pub struct TokensoftClient {
    config: ClientConfig,
    signer: RequestSigner,
    transport: Arc<dyn Transport>,
    time_sync: TimeSync,
    restrictions: RestrictionChecker,
}

impl TokensoftClient {
    /// Creates a client with the default transport and no contract provider.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Self::with_options(config, ClientOptions::default())
    }

    /// Creates a client with injected capabilities.
    ///
    /// Fails if the API URL, key id or secret key is empty.
    pub fn with_options(config: ClientConfig, options: ClientOptions) -> ClientResult<Self> {
        config.validate()?;

        let transport: Arc<dyn Transport> = match options.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(config.request_timeout())?),
        };
        let clock: Arc<dyn Clock> = options.clock.unwrap_or_else(|| Arc::new(SystemClock));

        Ok(Self {
            signer: RequestSigner::new(config.key_id.clone(), config.secret_key.clone()),
            time_sync: TimeSync::new(config.max_time_cache_age(), clock),
            restrictions: RestrictionChecker::new(options.contracts),
            transport,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the adjusted server time in milliseconds, as a decimal string.
    ///
    /// Probes the server (unsigned) when the cached observation is missing or
    /// too old.
    pub async fn server_time(&self) -> ClientResult<String> {
        self.time_sync
            .adjusted_time(|| self.probe_server_time())
            .await
    }

    /// The cached server time observation, if any.
    pub async fn time_cache(&self) -> Option<TimeCache> {
        self.time_sync.snapshot().await
    }

    /// Forgets the cached server time.
    pub async fn reset_time_cache(&self) {
        self.time_sync.invalidate().await;
    }

    async fn probe_server_time(&self) -> ClientResult<i64> {
        let body = serde_json::to_string(&GraphQlRequest::new(TIME_QUERY))?;
        let reply = self
            .transport
            .post(&self.config.api_url, HttpRequest::json(body))
            .await?;
        parse_server_time(&reply)
    }

    /// Signs and posts a raw JSON body, returning the envelope as received.
    ///
    /// Errors inside the envelope are not inspected here.
    pub async fn send_request(&self, body: &str) -> ClientResult<Response> {
        let timestamp = match self.server_time().await {
            Ok(timestamp) => timestamp,
            Err(e) => {
                error!("Error fetching server time for signed request: {}", e);
                return Err(e);
            }
        };
        let request = self.signer.signed_request(&timestamp, body.to_string())?;

        debug!("Sending signed request ({} bytes)", body.len());

        let reply = match self.transport.post(&self.config.api_url, request).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Error sending request to Tokensoft API: {}", e);
                return Err(e);
            }
        };

        serde_json::from_value(reply).map_err(|e| {
            error!("Tokensoft API reply is not a response envelope: {}", e);
            ClientError::Protocol(format!("malformed response envelope: {e}"))
        })
    }

    /// Serializes and sends a query, returning the envelope as received.
    pub async fn execute(&self, request: &GraphQlRequest) -> ClientResult<Response> {
        let body = serde_json::to_string(request)?;
        self.send_request(&body).await
    }

    /// Sends a query and unwraps the envelope.
    pub(crate) async fn query(&self, request: GraphQlRequest) -> ClientResult<ResponseData> {
        unwrap_response(self.execute(&request).await?)
    }

    /// Returns the reasons `tx` would be rejected by the token contract.
    ///
    /// Requires a contract provider in [`ClientOptions`]; without one this
    /// fails with a configuration error.
    pub async fn detect_transfer_restriction(
        &self,
        tx: &Transaction,
    ) -> ClientResult<Vec<TransferRestriction>> {
        self.restrictions.detect(tx).await
    }
}

impl fmt::Debug for TokensoftClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokensoftClient")
            .field("config", &self.config)
            .field("contracts", &self.restrictions.is_available())
            .finish_non_exhaustive()
    }
}

/// Reads `data.time` from a probe reply. Accepts a numeric string or a number.
fn parse_server_time(reply: &Value) -> ClientResult<i64> {
    let time = reply
        .get("data")
        .and_then(|data| data.get("time"))
        .ok_or_else(|| ClientError::Protocol(format!("time probe returned no data.time: {reply}")))?;

    let parsed = match time {
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    };

    parsed.ok_or_else(|| ClientError::Protocol(format!("unparsable server time: {time}")))
}
