use serde::Serialize;
use serde_json::{Map, Value};

/// Stored fields of one matched document, with the engine id under `_id`.
pub type Document = Map<String, Value>;

/// Paginated result returned by every collection endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResponse {
    pub data: Vec<Document>,
    pub results: usize,
    pub page: u32,
    pub total_results: u64,
    pub has_more: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
