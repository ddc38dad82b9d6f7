//! Unified error handling for calls against the Nova API
//!
//! Every transport or HTTP failure surfaces as a [`ServiceError`]. Nothing in
//! the client core retries on its own; `is_retryable` only informs the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Nova API calls
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Unified error type for API communication
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error_type", content = "details")]
pub enum ServiceError {
    /// Missing or rejected bearer credential
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Any other non-success HTTP status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Connection refused, reset, DNS failure...
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout
    #[error("Timeout: {0}")]
    Timeout(String),

    /// A 2xx response whose body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ServiceError {
    /// Build the error for a non-success HTTP response.
    ///
    /// `body` is the raw response text; the API reports failures as
    /// `{"error": "..."}` and occasionally `{"message": "..."}`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_error_message(body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body.trim().to_string()
            }
        });

        match status {
            401 => Self::Authentication(message),
            404 => Self::NotFound(message),
            _ => Self::Api { status, message },
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Authentication(_) => 401,
            Self::NotFound(_) => 404,
            Self::Api { status, .. } => *status,
            Self::Network(_) => 502,
            Self::Timeout(_) => 504,
            Self::InvalidResponse(_) => 502,
            Self::InvalidRequest(_) => 400,
        }
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .find(|msg| !msg.trim().is_empty())
        .map(str::to_string)
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::Timeout(err.to_string())
        } else if err.is_decode() {
            ServiceError::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            ServiceError::InvalidRequest(err.to_string())
        } else {
            ServiceError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_uses_error_field() {
        let err = ServiceError::from_response(400, r#"{"error":"User is already connected"}"#);
        assert_eq!(
            err,
            ServiceError::Api {
                status: 400,
                message: "User is already connected".to_string()
            }
        );
    }

    #[test]
    fn test_from_response_maps_auth_and_not_found() {
        assert!(matches!(
            ServiceError::from_response(401, r#"{"error":"Unauthorized"}"#),
            ServiceError::Authentication(msg) if msg == "Unauthorized"
        ));
        assert!(matches!(
            ServiceError::from_response(404, ""),
            ServiceError::NotFound(msg) if msg == "HTTP 404"
        ));
    }

    #[test]
    fn test_from_response_falls_back_to_raw_body() {
        let err = ServiceError::from_response(502, "Bad Gateway");
        assert_eq!(err.to_string(), "API error (502): Bad Gateway");
    }

    #[test]
    fn test_retryable() {
        assert!(ServiceError::Timeout("slow".into()).is_retryable());
        assert!(ServiceError::Network("reset".into()).is_retryable());
        assert!(ServiceError::from_response(503, "").is_retryable());
        assert!(!ServiceError::from_response(400, "").is_retryable());
        assert!(!ServiceError::Authentication("no token".into()).is_retryable());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ServiceError::NotFound("user".into())).unwrap();
        assert_eq!(json["error_type"], "NotFound");
        assert_eq!(json["details"], "user");
    }
}
