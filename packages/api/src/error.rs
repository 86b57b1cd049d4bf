//! Error taxonomy for calls against the kudos backend.

use serde_json::Value;

/// Path whose 404 means "the remembered identity no longer exists".
pub const CURRENT_USER_PATH: &str = "/users/me/";

/// Structured error code a backend may send for an unknown identity.
pub const INVALID_IDENTITY_CODE: &str = "invalid_identity";

/// Failure of a backend call, already normalised for display.
///
/// `Clone` so it can live inside view signals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend does not recognise the remembered identity. Never shown.
    #[error("Invalid user ID")]
    InvalidIdentity,

    #[error("Unable to connect to the server. Please make sure the backend is running on {base_url}")]
    ConnectionFailed { base_url: String },

    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Request failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// Build the error for a non-success response to `path`.
    ///
    /// The message comes from the JSON body's `error` field, then DRF's `detail`,
    /// then the first `non_field_errors` entry, and finally a generic
    /// status-coded message.
    pub fn from_response(path: &str, status: u16, body: &[u8]) -> Self {
        let parsed: Option<Value> = serde_json::from_slice(body).ok();

        let code = parsed
            .as_ref()
            .and_then(|v| v.get("code"))
            .and_then(Value::as_str);
        if code == Some(INVALID_IDENTITY_CODE) || (status == 404 && path == CURRENT_USER_PATH) {
            return ApiError::InvalidIdentity;
        }

        let message = parsed
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| format!("HTTP error! status: {status}"));

        ApiError::Backend { status, message }
    }

    /// Whether the bootstrap flow should recover silently from this error.
    pub fn is_invalid_identity(&self) -> bool {
        matches!(self, ApiError::InvalidIdentity)
    }
}

fn extract_message(body: &Value) -> Option<String> {
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        return Some(error.to_string());
    }
    if let Some(detail) = body.get("detail").and_then(Value::as_str) {
        return Some(detail.to_string());
    }
    body.get("non_field_errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(Value::as_str)
        .map(str::to_string)
}
