//! The errors + data wrapper returned by every signed call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `data` object of a response: one entry per invoked function.
pub type ResponseData = Map<String, Value>;

/// A single error reported by the API alongside (or instead of) data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    /// Error kind tag.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub time_thrown: String,
    /// Free-form structured detail attached by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiError {
    /// Renders the error as `name: message`, followed by ` - <data json>` when
    /// structured data is attached.
    pub fn describe(&self) -> String {
        match &self.data {
            Some(data) if !data.is_null() => {
                format!("{}: {} - {}", self.name, self.message, data)
            }
            _ => format!("{}: {}", self.name, self.message),
        }
    }
}

/// A response envelope.
///
/// `data` keys are the names of the queries/mutations invoked; each value may
/// be `null` when that function failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiError>>,
    #[serde(default)]
    pub data: Option<ResponseData>,
}

impl Response {
    /// Creates a response carrying only data.
    pub fn with_data(data: ResponseData) -> Self {
        Self {
            errors: None,
            data: Some(data),
        }
    }

    /// Returns the reported errors, or an empty slice.
    pub fn errors(&self) -> &[ApiError] {
        self.errors.as_deref().unwrap_or(&[])
    }

    /// Returns true if the envelope reports at least one error.
    pub fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    /// Returns true if `data` is absent or any named result inside it is null.
    pub fn has_null_data(&self) -> bool {
        match &self.data {
            None => true,
            Some(data) => data.values().any(Value::is_null),
        }
    }
}
