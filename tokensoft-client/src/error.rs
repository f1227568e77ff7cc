//! Client error types.

use thiserror::Error;
use tokensoft_projection::ProjectionError;
use tokensoft_types::ApiError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur when talking to the API or the token contract.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required setting is missing, or an optional capability an operation
    /// depends on was not supplied.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The HTTP exchange could not be completed.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The server replied with a shape this client does not understand.
    #[error("unexpected response: {0}")]
    Protocol(String),

    /// The response envelope carried errors and no usable data.
    #[error("{message}")]
    Api {
        message: String,
        errors: Vec<ApiError>,
    },

    /// A contract read call failed.
    #[error("contract call failed: {0}")]
    Contract(String),

    #[error("projection error: {0}")]
    Projection(#[from] ProjectionError),
}

impl ClientError {
    /// Returns true for configuration faults.
    pub fn is_config(&self) -> bool {
        matches!(self, ClientError::Config(_))
    }

    /// Returns true for transport-level faults.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::Http(_))
    }

    /// Returns true if the server reported the call as failed.
    pub fn is_api(&self) -> bool {
        matches!(self, ClientError::Api { .. })
    }

    /// Returns the API errors carried by an API fault.
    pub fn api_errors(&self) -> Option<&[ApiError]> {
        match self {
            ClientError::Api { errors, .. } => Some(errors),
            _ => None,
        }
    }
}
