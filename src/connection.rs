//! The search connection façade.

use crate::{
    bulk::SearchBatch,
    config::ConnectionConfig,
    error::{Result, SearchError},
    path::{self, ALL_INDICES, QueryParams},
};
use esconn_http::{
    Bytes, HeaderMap, HeaderValue, HttpClient, HttpRequest, HttpTransport, Method, Response,
    header,
};
use parking_lot::Mutex;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, trace};

const JSON: &str = "application/json";
const NDJSON: &str = "application/x-ndjson";

fn match_all_query() -> Value {
    json!({ "query": { "match_all": {} } })
}

#[derive(Serialize)]
struct PartialDoc<'a, T: ?Sized> {
    doc: &'a T,
}

/// Asynchronous connection to one search cluster endpoint.
///
/// Every operation resolves to the raw transport [`Response`], except
/// [`get`](Self::get) which decodes the body. A connection can be shared
/// across tasks behind an [`Arc`]; the only state carried between calls is
/// the pending multi-search batch.
pub struct Connection {
    base_url: String,
    config: ConnectionConfig,
    transport: Arc<dyn HttpTransport>,
    batch: Mutex<SearchBatch>,
}

impl Connection {
    /// Create a connection using the bundled reqwest transport.
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        let client = HttpClient::default_client()?;
        Ok(Self::with_transport(config, Arc::new(client)))
    }

    /// Create a connection that sends requests through `transport`.
    pub fn with_transport(config: ConnectionConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let base_url = config.base_url();
        debug!(base_url = %base_url, "Initializing search connection");

        Self {
            base_url,
            config,
            transport,
            batch: Mutex::new(SearchBatch::new()),
        }
    }

    /// Create a connection from a URI such as `http://es.example.com:9200`.
    pub fn from_uri(uri: &str) -> Result<Self> {
        Self::new(ConnectionConfig::from_uri(uri)?)
    }

    /// `{protocol}://{host}:{port}`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configuration this connection was built from.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Number of searches queued by [`multi_search`](Self::multi_search).
    pub fn pending_searches(&self) -> usize {
        self.batch.lock().len()
    }

    // =========================================================================
    // Search Operations
    // =========================================================================

    /// Run a search. `index` defaults to `_all`, `doc_type` to an empty
    /// segment and `body` to a match-all query.
    pub async fn search(
        &self,
        index: Option<&str>,
        doc_type: Option<&str>,
        body: Option<&Value>,
        params: &QueryParams,
    ) -> Result<Response> {
        self.operation("search", index, doc_type, body, params).await
    }

    /// Count matching documents. Defaults as for [`search`](Self::search).
    pub async fn count(
        &self,
        index: Option<&str>,
        doc_type: Option<&str>,
        body: Option<&Value>,
        params: &QueryParams,
    ) -> Result<Response> {
        self.operation("count", index, doc_type, body, params).await
    }

    /// Queue a search for the next [`apply_search`](Self::apply_search).
    pub fn multi_search(&self, index: impl Into<String>, body: Value) {
        let index = index.into();
        trace!(index = %index, "Queueing multi-search entry");
        self.batch.lock().add(index, body);
    }

    /// Send every queued search in one `_msearch` request.
    ///
    /// The batch is taken and cleared before the request goes out, so
    /// searches queued while it is in flight form the next batch. A failed
    /// request does not restore the batch. An empty batch is still sent.
    pub async fn apply_search(&self, params: &QueryParams) -> Result<Response> {
        let (count, payload) = {
            let mut batch = self.batch.lock();
            (batch.len(), batch.prepare_search())
        };
        debug!(searches = count, "Sending multi-search batch");

        let request = HttpRequest::post(self.url(&path::msearch_path(params)))
            .headers(content_type(NDJSON))
            .body(payload);
        self.dispatch(request).await
    }

    // =========================================================================
    // Document Operations
    // =========================================================================

    /// Fetch a document and decode the response body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        index: &str,
        doc_type: &str,
        doc_id: &str,
        params: &QueryParams,
    ) -> Result<T> {
        let response = self
            .request_document(index, doc_type, doc_id, Method::GET, None, params)
            .await?;
        serde_json::from_slice(response.bytes()).map_err(SearchError::Decode)
    }

    /// Index `contents` under the given id.
    pub async fn put<T: Serialize + ?Sized>(
        &self,
        index: &str,
        doc_type: &str,
        doc_id: &str,
        contents: &T,
        params: &QueryParams,
    ) -> Result<Response> {
        let body = serde_json::to_vec(contents).map_err(SearchError::Encode)?;
        self.request_document(index, doc_type, doc_id, Method::PUT, Some(body.into()), params)
            .await
    }

    /// Partially update a document; `contents` is sent as `{"doc": contents}`.
    pub async fn update<T: Serialize + ?Sized>(
        &self,
        index: &str,
        doc_type: &str,
        doc_id: &str,
        contents: &T,
    ) -> Result<Response> {
        let body = serde_json::to_vec(&PartialDoc { doc: contents }).map_err(SearchError::Encode)?;
        self.post_by_path(&path::update_path(index, doc_type, doc_id), body)
            .await
    }

    /// Delete a document.
    pub async fn delete(
        &self,
        index: &str,
        doc_type: &str,
        doc_id: &str,
        params: &QueryParams,
    ) -> Result<Response> {
        self.request_document(index, doc_type, doc_id, Method::DELETE, None, params)
            .await
    }

    /// Issue `method` against `/{index}/{doc_type}/{doc_id}?{params}`.
    ///
    /// The body is attached only when present. Connection request options
    /// are merged in.
    pub async fn request_document(
        &self,
        index: &str,
        doc_type: &str,
        doc_id: &str,
        method: Method,
        body: Option<Bytes>,
        params: &QueryParams,
    ) -> Result<Response> {
        let url = self.url(&path::document_path(index, doc_type, doc_id, params));
        let mut request = HttpRequest::new(method, url);

        if let Some(body) = body {
            request = request.headers(content_type(JSON)).body(body);
        }

        self.dispatch(request).await
    }

    // =========================================================================
    // Raw Paths
    // =========================================================================

    /// POST a JSON body to a path relative to the base URL.
    pub async fn post_by_path(&self, path: &str, body: impl Into<Bytes>) -> Result<Response> {
        let request = HttpRequest::post(self.url(path))
            .headers(content_type(JSON))
            .body(body);
        self.dispatch(request).await
    }

    /// GET a path relative to the base URL.
    pub async fn get_by_path(&self, path: &str) -> Result<Response> {
        self.dispatch(HttpRequest::get(self.url(path))).await
    }

    async fn operation(
        &self,
        operation: &str,
        index: Option<&str>,
        doc_type: Option<&str>,
        body: Option<&Value>,
        params: &QueryParams,
    ) -> Result<Response> {
        let path = path::build_path(
            operation,
            index.unwrap_or(ALL_INDICES),
            doc_type.unwrap_or(""),
            params,
        );

        let body = match body {
            Some(body) => serde_json::to_vec(body),
            None => serde_json::to_vec(&match_all_query()),
        }
        .map_err(SearchError::Encode)?;

        self.post_by_path(&path, body).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<Response> {
        let request = self.config.request_options.apply(request);
        debug!(method = %request.method(), url = %request.url(), "Dispatching request");

        Ok(self.transport.fetch(request).await?)
    }
}

fn content_type(mime: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
    headers
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("base_url", &self.base_url)
            .field("pending_searches", &self.pending_searches())
            .finish()
    }
}
