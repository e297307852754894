//! Error types for search client operations.

use esconn_http::HttpClientError;
use thiserror::Error;

/// Search client error type.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The connection could not be configured, e.g. a URI without host or scheme.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Failure reported by the HTTP transport, passed through unchanged.
    #[error(transparent)]
    Transport(#[from] HttpClientError),

    /// A response body could not be decoded.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl SearchError {
    /// The underlying transport error, if this is one.
    pub fn as_transport(&self) -> Option<&HttpClientError> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for search client operations.
pub type Result<T> = std::result::Result<T, SearchError>;
