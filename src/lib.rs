//! Asynchronous client for a search engine's REST API.
//!
//! `esconn` builds REST paths and query strings, batches searches for the
//! `_msearch` endpoint and dispatches everything through a pluggable
//! [`HttpTransport`](esconn_http::HttpTransport).
//!
//! # Example
//!
//! ```rust,no_run
//! use esconn::prelude::*;
//! use serde_json::{json, Value};
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let conn = Connection::from_uri("http://localhost:9200")?;
//!
//!     conn.put("articles", "_doc", "1", &json!({"title": "Hello"}), &QueryParams::new())
//!         .await?;
//!
//!     let doc: Value = conn.get("articles", "_doc", "1", &QueryParams::new()).await?;
//!     println!("{}", doc["_source"]["title"]);
//!
//!     // Batch two searches into a single round trip.
//!     conn.multi_search("articles", json!({"query": {"match": {"title": "hello"}}}));
//!     conn.multi_search("comments", json!({"query": {"match_all": {}}}));
//!     let response = conn.apply_search(&QueryParams::new()).await?;
//!     println!("{}", response.text()?);
//!
//!     Ok(())
//! }
//! ```
//!
//! No retries are attempted; every transport failure is returned to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bulk;
mod config;
mod connection;
mod error;
pub mod path;

pub use bulk::{BatchEntry, SearchBatch};
pub use config::{ConnectionConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PROTOCOL, RequestOptions};
pub use connection::Connection;
pub use error::{Result, SearchError};
pub use path::{ALL_INDICES, QueryParams};

pub use esconn_http;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        ALL_INDICES, Connection, ConnectionConfig, QueryParams, RequestOptions, Result, SearchError,
    };
    pub use esconn_http::{HttpTransport, Method, Response};
}
