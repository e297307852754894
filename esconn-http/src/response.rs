//! HTTP response wrapper.

use crate::{HttpClientError, Result};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    url: url::Url,
}

impl Response {
    /// Assemble a response. Transports other than [`HttpClient`](crate::HttpClient)
    /// use this to hand results back.
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>, url: url::Url) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            url,
        }
    }

    /// Create a response from a reqwest response, buffering the body.
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = response.bytes().await?;

        Ok(Self {
            status,
            headers,
            body,
            url,
        })
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Check if the response was successful (2xx).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Get the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get a specific header value.
    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        self.headers
            .get(name.as_ref())
            .and_then(|v| v.to_str().ok())
    }

    /// Get the final response URL.
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Get the response body as bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Consume the response and return the body.
    pub fn into_bytes(self) -> Bytes {
        self.body
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec()).map_err(|e| HttpClientError::Body(e.to_string()))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| HttpClientError::Body(e.to_string()))
    }

    /// Get the content type if available.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Turn a 4xx/5xx response into [`HttpClientError::Response`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_client_error() || self.status.is_server_error() {
            let message = self.text().unwrap_or_else(|_| "<non-utf8 body>".to_string());
            Err(HttpClientError::Response {
                status: self.status.as_u16(),
                message,
            })
        } else {
            Ok(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn response(status: u16, body: &'static str) -> Response {
        Response::new(
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            body,
            url::Url::parse("http://localhost:9200/").unwrap(),
        )
    }

    #[test]
    fn test_json_body() {
        let value: Value = response(200, r#"{"found":true}"#).json().unwrap();
        assert_eq!(value["found"], true);
    }

    #[test]
    fn test_error_for_status_keeps_body() {
        let err = response(404, r#"{"found":false}"#).error_for_status().unwrap_err();
        match err {
            HttpClientError::Response { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, r#"{"found":false}"#);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_success_passes_through() {
        assert!(response(201, "{}").error_for_status().is_ok());
    }
}
