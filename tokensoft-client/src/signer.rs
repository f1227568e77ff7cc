//! HMAC request signing.

use crate::error::{ClientError, ClientResult};
use crate::transport::HttpRequest;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

pub const ACCESS_KEY_HEADER: &str = "access-key";
pub const ACCESS_SIGN_HEADER: &str = "access-sign";
pub const ACCESS_TIMESTAMP_HEADER: &str = "access-timestamp";

/// Computes the hex HMAC-SHA256 of `timestamp` immediately followed by `body`.
pub fn sign(secret_key: &str, timestamp: &str, body: &str) -> ClientResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .map_err(|e| ClientError::Config(format!("unusable secret key: {e}")))?;
    mac.update(timestamp.as_bytes());
    mac.update(body.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Attaches key id, signature and timestamp headers to outgoing bodies.
#[derive(Clone)]
pub struct RequestSigner {
    key_id: String,
    secret_key: String,
}

impl RequestSigner {
    pub fn new(key_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Signs `body` at `timestamp`. The body is sent unmodified.
    pub fn signed_request(&self, timestamp: &str, body: String) -> ClientResult<HttpRequest> {
        let signature = sign(&self.secret_key, timestamp, &body)?;
        Ok(HttpRequest::json(body)
            .header(ACCESS_KEY_HEADER, self.key_id.clone())
            .header(ACCESS_SIGN_HEADER, signature)
            .header(ACCESS_TIMESTAMP_HEADER, timestamp))
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("key_id", &self.key_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
