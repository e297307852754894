//! The transport seam.

use crate::{HttpRequest, Response, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Something that can execute an [`HttpRequest`].
///
/// Implementations must be safe to share between concurrently running
/// requests; they should hold no per-call mutable state.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and wait for the complete response.
    async fn fetch(&self, request: HttpRequest) -> Result<Response>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn fetch(&self, request: HttpRequest) -> Result<Response> {
        (**self).fetch(request).await
    }
}
