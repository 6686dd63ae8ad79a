//! Error types for the exchange rate client.

use crate::http::HttpResponse;

/// Invalid construction arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("App ID cannot be empty")]
    EmptyAppId,
}

/// The transport could not complete the exchange.
///
/// Carries the response when one was received before the failure, so the
/// client can still surface the upstream error body.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Transport failure: {message}")]
pub struct TransportError {
    message: String,
    response: Option<HttpResponse>,
}

impl TransportError {
    /// Creates a failure with no response attached.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: None,
        }
    }

    /// Creates a failure that still carries the response it received.
    pub fn with_response(message: impl Into<String>, response: HttpResponse) -> Self {
        Self {
            message: message.into(),
            response: Some(response),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_without_response() {
        let err = TransportError::new("connection refused");
        assert_eq!(err.message(), "connection refused");
        assert!(err.response().is_none());
        assert_eq!(err.to_string(), "Transport failure: connection refused");
    }

    #[test]
    fn test_transport_error_keeps_response() {
        let err = TransportError::with_response("bad status", HttpResponse::new(401, "{}"));
        assert_eq!(err.response().map(|r| r.status), Some(401));
        assert_eq!(err.response().unwrap().body, "{}");
    }
}
