//! API Errors
//!
//! Every failure is "the request failed" to callers; the variants only
//! shape the message shown to the user.

use serde::Deserialize;
use thiserror::Error;

/// Shown when a failure carries no message of its own
pub const GENERIC_FAILURE: &str = "An error occurred while communicating with the server";

/// Used for non-2xx responses whose body names no reason
pub const STATUS_FALLBACK: &str = "API request failed";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Fetch rejected before a response arrived
    #[error("{0}")]
    Network(String),

    /// Non-2xx status, with the server's reason when it sent one
    #[error("{}", .message.as_deref().unwrap_or(STATUS_FALLBACK))]
    Status { status: u16, message: Option<String> },

    /// Response body was not the expected JSON
    #[error("{0}")]
    Decode(String),

    /// Payload could not be serialized
    #[error("{0}")]
    Encode(String),
}

impl ApiError {
    /// Text for the failure alert
    pub fn alert_message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            text
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Error body shapes the backend produces: our envelope carries `message`,
/// framework errors carry `detail`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Server-supplied reason from a failed response body, if any
pub(crate) fn reason_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let detail = match parsed.detail {
        Some(serde_json::Value::String(text)) => Some(text),
        _ => None,
    };
    parsed
        .message
        .into_iter()
        .chain(detail)
        .find(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_prefers_server_reason() {
        let err = ApiError::Status { status: 404, message: Some("Player with ID x not found".to_string()) };
        assert_eq!(err.alert_message(), "Player with ID x not found");

        let bare = ApiError::Status { status: 500, message: None };
        assert_eq!(bare.alert_message(), STATUS_FALLBACK);
        assert_eq!(bare.status(), Some(500));
    }

    #[test]
    fn test_empty_message_falls_back() {
        assert_eq!(ApiError::Network(String::new()).alert_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_reason_from_body() {
        assert_eq!(reason_from_body(r#"{"success": false, "message": "bad"}"#), Some("bad".to_string()));
        assert_eq!(reason_from_body(r#"{"detail": "Save file not found"}"#), Some("Save file not found".to_string()));
        assert_eq!(reason_from_body(r#"{"detail": [{"msg": "field required"}]}"#), None);
        assert_eq!(reason_from_body("<html>"), None);
    }
}
