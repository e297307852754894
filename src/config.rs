//! Connection configuration.

use crate::error::{Result, SearchError};
use esconn_http::HttpRequest;
use std::time::Duration;

/// Default host.
pub const DEFAULT_HOST: &str = "localhost";
/// Default REST port.
pub const DEFAULT_PORT: u16 = 9200;
/// Default scheme.
pub const DEFAULT_PROTOCOL: &str = "http";

/// Options applied to every request a connection issues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Per-request timeout, overriding the transport default.
    pub timeout: Option<Duration>,
    /// Extra headers.
    pub headers: Vec<(String, String)>,
    /// Basic auth username and optional password.
    pub basic_auth: Option<(String, Option<String>)>,
}

impl RequestOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set basic authentication credentials.
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: Option<String>) -> Self {
        self.basic_auth = Some((username.into(), password));
        self
    }

    pub(crate) fn apply(&self, mut request: HttpRequest) -> HttpRequest {
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some((username, password)) = &self.basic_auth {
            request = request.basic_auth(username.as_str(), password.as_deref());
        }
        request
    }
}

/// Where and how a [`Connection`](crate::Connection) talks to the cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Host name or address.
    pub host: String,
    /// REST port.
    pub port: u16,
    /// URL scheme, `http` or `https`.
    pub protocol: String,
    /// Options merged into every request.
    pub request_options: RequestOptions,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            protocol: DEFAULT_PROTOCOL.to_string(),
            request_options: RequestOptions::default(),
        }
    }
}

impl ConnectionConfig {
    /// Create a configuration for `host` with the default port and scheme.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Parse a full URI such as `https://es.example.com:9243`.
    ///
    /// When the URI carries no port, the scheme's well-known port is used,
    /// falling back to 9200 for unknown schemes.
    pub fn from_uri(uri: &str) -> Result<Self> {
        let parsed = url::Url::parse(uri)
            .map_err(|e| SearchError::Configuration(format!("invalid URI {uri:?}: {e}")))?;

        let host = match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => {
                return Err(SearchError::Configuration(format!(
                    "URI {uri:?} has no host"
                )));
            }
        };

        if parsed.scheme().is_empty() {
            return Err(SearchError::Configuration(format!(
                "URI {uri:?} has no scheme"
            )));
        }

        Ok(Self {
            host,
            port: parsed.port_or_known_default().unwrap_or(DEFAULT_PORT),
            protocol: parsed.scheme().to_string(),
            request_options: RequestOptions::default(),
        })
    }

    /// Set the host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the scheme.
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// Set the options merged into every request.
    pub fn with_request_options(mut self, options: RequestOptions) -> Self {
        self.request_options = options;
        self
    }

    /// `{protocol}://{host}:{port}`, the prefix of every request URL.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}
