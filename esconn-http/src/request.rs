//! Owned request description handed to a transport.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use std::time::Duration;

/// A fully described HTTP request.
///
/// Unlike a reqwest builder this value is not tied to a particular client, so
/// any [`HttpTransport`](crate::HttpTransport) implementation can execute it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Bytes>,
    timeout: Option<Duration>,
}

impl HttpRequest {
    /// Create a request with the given method and absolute URL.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// Create a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Create a POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Create a PUT request.
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    /// Create a DELETE request.
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Add a header. Names or values that are not valid HTTP are skipped.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => tracing::warn!(header = %name, "Skipping invalid request header"),
        }
        self
    }

    /// Add multiple headers.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Set the body as raw bytes.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON body and set the content type.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> serde_json::Result<Self> {
        let bytes = serde_json::to_vec(value)?;
        self.headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        self.body = Some(Bytes::from(bytes));
        Ok(self)
    }

    /// Set a timeout for this request, overriding the transport default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set basic authentication.
    pub fn basic_auth(self, username: impl Into<String>, password: Option<impl Into<String>>) -> Self {
        use base64::Engine;
        let credentials = match password {
            Some(p) => format!("{}:{}", username.into(), p.into()),
            None => format!("{}:", username.into()),
        };
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
        self.header("Authorization", format!("Basic {}", encoded))
    }

    /// The request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The absolute request URL, exactly as it will be sent.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request headers.
    pub fn headers_ref(&self) -> &HeaderMap {
        &self.headers
    }

    /// The request body, if one was attached.
    pub fn body_bytes(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// The per-request timeout, if set.
    pub fn timeout_ref(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn into_parts(self) -> (Method, String, HeaderMap, Option<Bytes>, Option<Duration>) {
        (self.method, self.url, self.headers, self.body, self.timeout)
    }
}
