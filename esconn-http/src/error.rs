//! Transport error types.

use std::time::Duration;
use thiserror::Error;

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, HttpClientError>;

/// Errors surfaced by an [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request building error.
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    /// The server answered with a non-2xx status.
    #[error("Response error: {status} - {message}")]
    Response {
        /// HTTP status code.
        status: u16,
        /// Response body, or a placeholder when it is not text.
        message: String,
    },

    /// Response body could not be read as the requested representation.
    #[error("Body error: {0}")]
    Body(String),

    /// Underlying HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl HttpClientError {
    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_)) || matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Check if this is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_)) || matches!(self, Self::Http(e) if e.is_connect())
    }

    /// Get the HTTP status code if the server produced one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_from_response_error() {
        let err = HttpClientError::Response {
            status: 404,
            message: "index_not_found_exception".to_string(),
        };
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_timeout());
        assert!(err.to_string().contains("index_not_found_exception"));
    }

    #[test]
    fn test_timeout_classification() {
        let err = HttpClientError::Timeout(Duration::from_secs(5));
        assert!(err.is_timeout());
        assert!(!err.is_connection());
        assert_eq!(err.status_code(), None);
    }
}
