//! Gateway error types.

use catalog_commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur when talking to the remote catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// Transport failure: DNS, connect, TLS, reset.
    #[error("Network error: {0}")]
    Network(String),

    /// Transport timed out.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Non-2xx response.
    #[error("HTTP error! status: {status} ({url})")]
    Http { status: u16, url: String },

    /// Body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Request could not be built (bad base URL, unusable path).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The gateway implementation does not offer this operation.
    #[error("Operation not supported by this gateway: {0}")]
    Unsupported(&'static str),
}

impl GatewayError {
    /// Transport-level failure (no response was received).
    pub fn is_network(&self) -> bool {
        matches!(self, GatewayError::Network(_) | GatewayError::Timeout(_))
    }

    /// HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GatewayError::Timeout(e.to_string())
        } else if e.is_decode() {
            GatewayError::Parse(e.to_string())
        } else if e.is_builder() {
            GatewayError::InvalidRequest(e.to_string())
        } else {
            GatewayError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Parse(e.to_string())
    }
}

impl From<CommerceError> for GatewayError {
    fn from(e: CommerceError) -> Self {
        GatewayError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_carries_status() {
        let err = GatewayError::Http {
            status: 503,
            url: "https://dummyjson.com/products".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert_eq!(err.status(), Some(503));
        assert!(!err.is_network());
    }

    #[test]
    fn test_network_classification() {
        assert!(GatewayError::Network("refused".into()).is_network());
        assert!(GatewayError::Timeout("30s".into()).is_network());
        assert!(!GatewayError::Parse("eof".into()).is_network());
    }

    #[test]
    fn test_invalid_product_becomes_parse_error() {
        let err: GatewayError = CommerceError::InvalidProduct {
            id: 3,
            reason: "rating 7 outside 0-5".into(),
        }
        .into();
        assert!(matches!(err, GatewayError::Parse(msg) if msg.contains("rating")));
    }
}
