//! Error types for projections.

use thiserror::Error;

/// Result type for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors raised while building or applying a projection.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The projection names a field the record does not have.
    #[error("unknown field `{path}`")]
    UnknownField { path: String },

    /// A nested selection was given for a scalar field.
    #[error("field `{path}` is a scalar and cannot take a nested selection")]
    ScalarField { path: String },

    /// A bare include was given for an object or list-of-objects field.
    #[error("field `{path}` is an object and requires a nested selection")]
    SelectionRequired { path: String },

    /// A dynamic projection held a value that is neither a flag nor a nested object.
    #[error("invalid selection for `{path}`: {value}")]
    InvalidSelection { path: String, value: String },

    /// A dynamic projection was not a JSON object.
    #[error("projection must be an object, got {0}")]
    NotAnObject(String),

    /// The value being projected is not an object of the expected record.
    #[error("expected a {record} object, got {found}")]
    NotARecord { record: &'static str, found: String },

    /// A projected value could not be decoded into the requested type.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
