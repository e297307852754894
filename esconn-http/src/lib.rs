//! # esconn HTTP transport
//!
//! The HTTP capability used by the `esconn` search client. Requests are
//! described by an owned [`HttpRequest`] and executed through the
//! [`HttpTransport`] trait, so the client can run on the bundled reqwest
//! implementation or on anything else that speaks HTTP.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use esconn_http::{HttpClient, HttpClientConfig, HttpRequest, HttpTransport};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HttpClientConfig::builder()
//!         .timeout(Duration::from_secs(5))
//!         .build();
//!     let client = HttpClient::new(config)?;
//!
//!     let response = client
//!         .fetch(HttpRequest::get("http://localhost:9200/_cluster/health"))
//!         .await?;
//!
//!     println!("Status: {}", response.status());
//!     Ok(())
//! }
//! ```
//!
//! Non-2xx responses are reported as [`HttpClientError::Response`] unless
//! [`HttpClientConfig::error_for_status`] is turned off. There is no retry
//! logic at this layer.

mod client;
mod config;
mod error;
mod request;
mod response;
mod transport;

pub use client::HttpClient;
pub use config::{HttpClientConfig, HttpClientConfigBuilder};
pub use error::{HttpClientError, Result};
pub use request::HttpRequest;
pub use response::Response;
pub use transport::HttpTransport;

// Re-export common types
pub use bytes::Bytes;
pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
pub use url::Url;
