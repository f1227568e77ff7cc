//! Turning a response envelope into data or an error.

use crate::error::{ClientError, ClientResult};
use tokensoft_types::{Response, ResponseData};
use tracing::warn;

/// Returns the envelope's data, or an API error.
///
/// The envelope is rejected only when it reports errors *and* its data is
/// absent or has a null entry. Errors that accompany complete data are
/// treated as warnings and dropped here. An envelope with neither data nor
/// errors is a protocol error.
pub fn unwrap_response(response: Response) -> ClientResult<ResponseData> {
    if response.has_errors() && response.has_null_data() {
        let errors = response.errors.unwrap_or_default();
        let message = format!(
            "Errors: {}",
            errors
                .iter()
                .map(|e| e.describe())
                .collect::<Vec<_>>()
                .join("; ")
        );
        return Err(ClientError::Api { message, errors });
    }

    if response.has_errors() {
        for error in response.errors() {
            warn!("Ignoring non-fatal API error: {}", error.describe());
        }
    }

    response
        .data
        .ok_or_else(|| ClientError::Protocol("response carried neither data nor errors".to_string()))
}
