//! Client configuration and injected capabilities.

use crate::clock::Clock;
use crate::error::{ClientError, ClientResult};
use crate::eth::ContractProvider;
use crate::transport::Transport;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default maximum age of the server time cache (20 minutes).
pub const DEFAULT_MAX_TIME_CACHE_AGE_MS: u64 = 20 * 60 * 1000;

/// Default HTTP timeout for the built-in transport.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

const ENV_API_URL: &str = "TOKENSOFT_API_URL";
const ENV_KEY_ID: &str = "TOKENSOFT_KEY_ID";
const ENV_SECRET_KEY: &str = "TOKENSOFT_SECRET_KEY";
const ENV_MAX_TIME_CACHE_AGE_MS: &str = "TOKENSOFT_MAX_TIME_CACHE_AGE_MS";

/// Connection settings for the API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Endpoint every query is posted to.
    pub api_url: String,
    /// Identifier of the API key, sent as `access-key`.
    pub key_id: String,
    /// Secret used to sign requests. Never sent over the wire.
    pub secret_key: String,
    /// How long a server time observation is reused before re-probing.
    #[serde(default = "default_max_time_cache_age_ms")]
    pub max_time_cache_age_ms: u64,
    /// Timeout applied by the built-in HTTP transport.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_max_time_cache_age_ms() -> u64 {
    DEFAULT_MAX_TIME_CACHE_AGE_MS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl ClientConfig {
    /// Creates a config with default cache age and timeout.
    pub fn new(
        api_url: impl Into<String>,
        key_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            key_id: key_id.into(),
            secret_key: secret_key.into(),
            max_time_cache_age_ms: DEFAULT_MAX_TIME_CACHE_AGE_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Overrides the time cache age.
    #[must_use]
    pub fn with_max_time_cache_age(mut self, age: Duration) -> Self {
        self.max_time_cache_age_ms = u64::try_from(age.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Reads the config from `TOKENSOFT_*` environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (used by [`ClientConfig::from_env`]).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let mut config = Self::new(
            lookup(ENV_API_URL).unwrap_or_default(),
            lookup(ENV_KEY_ID).unwrap_or_default(),
            lookup(ENV_SECRET_KEY).unwrap_or_default(),
        );

        if let Some(raw) = lookup(ENV_MAX_TIME_CACHE_AGE_MS) {
            config.max_time_cache_age_ms = raw.trim().parse().map_err(|_| {
                ClientError::Config(format!(
                    "{ENV_MAX_TIME_CACHE_AGE_MS} must be a whole number of milliseconds, got {raw:?}"
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Fails on the first empty required setting.
    pub fn validate(&self) -> ClientResult<()> {
        if self.api_url.is_empty() {
            return Err(ClientError::Config("missing apiUrl argument".to_string()));
        }
        if self.key_id.is_empty() {
            return Err(ClientError::Config("missing keyId argument".to_string()));
        }
        if self.secret_key.is_empty() {
            return Err(ClientError::Config("missing secretKey argument".to_string()));
        }
        Ok(())
    }

    pub fn max_time_cache_age(&self) -> Duration {
        Duration::from_millis(self.max_time_cache_age_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("key_id", &self.key_id)
            .field("secret_key", &"<redacted>")
            .field("max_time_cache_age_ms", &self.max_time_cache_age_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Optional capabilities injected at construction.
///
/// Anything left unset falls back to a default (the reqwest transport, the
/// system clock), except the contract provider: without one, on-chain checks
/// fail with a configuration error.
#[derive(Clone, Default)]
pub struct ClientOptions {
    pub transport: Option<Arc<dyn Transport>>,
    pub contracts: Option<Arc<dyn ContractProvider>>,
    pub clock: Option<Arc<dyn Clock>>,
}

impl ClientOptions {
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    #[must_use]
    pub fn with_contracts(mut self, contracts: Arc<dyn ContractProvider>) -> Self {
        self.contracts = Some(contracts);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("transport", &self.transport.is_some())
            .field("contracts", &self.contracts.is_some())
            .field("clock", &self.clock.is_some())
            .finish()
    }
}
