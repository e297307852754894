//! reqwest-backed transport.

use crate::{HttpClientConfig, HttpClientError, HttpRequest, HttpTransport, Response, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Pooled HTTP client built on reqwest.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: Arc<HttpClientConfig>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.gzip)
            .brotli(config.brotli);

        if config.follow_redirects {
            builder = builder.redirect(reqwest::redirect::Policy::limited(config.max_redirects));
        } else {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }

        let inner = builder
            .build()
            .map_err(|e| HttpClientError::RequestBuild(e.to_string()))?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(HttpClientConfig::default())
    }

    /// Get the underlying reqwest client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    /// Get the client configuration.
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    fn build(&self, request: HttpRequest) -> Result<reqwest::Request> {
        let (method, url, headers, body, timeout) = request.into_parts();
        let url = url::Url::parse(&url).map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;

        let mut builder = self.inner.request(method, url);

        for (name, value) in &self.config.default_headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        // Per-request headers win over defaults.
        builder = builder.headers(headers);

        if let Some(body) = body {
            builder = builder.body(body);
        }

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn fetch(&self, request: HttpRequest) -> Result<Response> {
        let timeout = request.timeout_ref().unwrap_or(self.config.timeout);
        let request = self.build(request)?;

        debug!(method = %request.method(), url = %request.url(), "Sending HTTP request");

        let response = match self.inner.execute(request).await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Err(HttpClientError::Timeout(timeout)),
            Err(e) => return Err(e.into()),
        };
        let response = Response::from_reqwest(response).await?;

        debug!(status = %response.status(), "Received HTTP response");

        if self.config.error_for_status {
            response.error_for_status()
        } else {
            Ok(response)
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish()
    }
}
