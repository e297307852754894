//! Multi-search batching.

use serde_json::{Value, json};

/// One pending search in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    /// Index the search targets.
    pub index: String,
    /// Query DSL body, passed through untouched.
    pub body: Value,
}

/// Ordered accumulator of searches waiting to be sent to `_msearch`.
///
/// Entries are kept in insertion order because the wire format pairs each
/// header line with the body line that follows it.
#[derive(Debug, Clone, Default)]
pub struct SearchBatch {
    entries: Vec<BatchEntry>,
}

impl SearchBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a search against `index`.
    pub fn add(&mut self, index: impl Into<String>, body: Value) {
        self.entries.push(BatchEntry {
            index: index.into(),
            body,
        });
    }

    /// Number of queued searches.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queued searches, oldest first.
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    /// Drain the batch and render it as newline-delimited JSON.
    ///
    /// Each entry becomes `{"index":<index>}\n<body>\n`. The batch is empty
    /// afterwards; draining an empty batch yields an empty payload.
    pub fn prepare_search(&mut self) -> String {
        let entries = std::mem::take(&mut self.entries);

        let mut payload = String::new();
        for entry in &entries {
            payload.push_str(&json!({ "index": entry.index }).to_string());
            payload.push('\n');
            payload.push_str(&entry.body.to_string());
            payload.push('\n');
        }
        payload
    }
}
