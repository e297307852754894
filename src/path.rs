//! REST path construction.
//!
//! Everything here is pure string building. Index, type and id segments are
//! inserted verbatim; an empty document type produces an empty segment
//! (`/idx//_search`), which the server tolerates.

use std::fmt;
use url::form_urlencoded;

/// Index selector that targets every index in the cluster.
pub const ALL_INDICES: &str = "_all";

/// Path of the multi-search endpoint.
pub const MSEARCH_PATH: &str = "/_msearch";

/// Ordered query-string parameters.
///
/// Pairs are encoded in insertion order. Duplicate keys are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Form-urlencode the parameters (`a=1&b=two+words`).
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for QueryParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Build an operation path: `/{index}/{doc_type}/_{operation}`.
///
/// A query string is appended only when `params` is non-empty.
pub fn build_path(operation: &str, index: &str, doc_type: &str, params: &QueryParams) -> String {
    let path = format!("/{index}/{doc_type}/_{operation}");
    with_optional_query(path, params)
}

/// Build a document path: `/{index}/{doc_type}/{doc_id}?{query}`.
///
/// The `?` is always present, so an empty parameter set yields a trailing
/// bare `?`. Servers treat it as an empty query string.
// TODO: drop the bare `?` for empty params; kept so request URLs match existing clients byte for byte.
pub fn document_path(index: &str, doc_type: &str, doc_id: &str, params: &QueryParams) -> String {
    format!("/{index}/{doc_type}/{doc_id}?{}", params.to_query_string())
}

/// Build the partial-update path: `/{index}/{doc_type}/{doc_id}/_update`.
pub fn update_path(index: &str, doc_type: &str, doc_id: &str) -> String {
    format!("/{index}/{doc_type}/{doc_id}/_update")
}

/// Build the multi-search path, with a query string only when `params` is non-empty.
pub fn msearch_path(params: &QueryParams) -> String {
    with_optional_query(MSEARCH_PATH.to_string(), params)
}

fn with_optional_query(mut path: String, params: &QueryParams) -> String {
    if !params.is_empty() {
        path.push('?');
        path.push_str(&params.to_query_string());
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_path_without_params() {
        assert_eq!(
            build_path("search", "idx", "type", &QueryParams::new()),
            "/idx/type/_search"
        );
    }

    #[test]
    fn test_build_path_with_params() {
        let params = QueryParams::new().with("q", "x");
        assert_eq!(
            build_path("search", "idx", "type", &params),
            "/idx/type/_search?q=x"
        );
    }

    #[test]
    fn test_build_path_defaults_keep_empty_type_segment() {
        assert_eq!(
            build_path("count", ALL_INDICES, "", &QueryParams::new()),
            "/_all//_count"
        );
    }

    #[test]
    fn test_params_keep_insertion_order_and_encode() {
        let params = QueryParams::from([("size", "10"), ("q", "title:rust lang"), ("routing", "a/b")]);
        assert_eq!(
            params.to_query_string(),
            "size=10&q=title%3Arust+lang&routing=a%2Fb"
        );
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_params_accept_non_string_values() {
        let params = QueryParams::new().with("from", 20).with("version", true);
        assert_eq!(params.to_string(), "from=20&version=true");
    }

    #[test]
    fn test_document_path_always_has_query_separator() {
        assert_eq!(document_path("i", "t", "5", &QueryParams::new()), "/i/t/5?");
        assert_eq!(
            document_path("i", "t", "5", &QueryParams::new().with("refresh", "true")),
            "/i/t/5?refresh=true"
        );
    }

    #[test]
    fn test_update_path() {
        assert_eq!(update_path("i", "t", "id"), "/i/t/id/_update");
    }

    #[test]
    fn test_msearch_path() {
        assert_eq!(msearch_path(&QueryParams::new()), "/_msearch");
        assert_eq!(
            msearch_path(&QueryParams::new().with("max_concurrent_searches", 4)),
            "/_msearch?max_concurrent_searches=4"
        );
    }
}
