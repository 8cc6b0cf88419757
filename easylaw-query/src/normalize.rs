use easylaw_api::response::{Document, SearchResponse};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::query::Pagination;

/// Key under which the engine-assigned id is attached to each document.
pub const ID_FIELD: &str = "_id";

/// The subset of an Elasticsearch `_search` response we read.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchResponse {
    pub hits: RawHits,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHits {
    #[serde(default)]
    pub total: Option<RawTotal>,
    #[serde(default)]
    pub hits: Vec<RawHit>,
}

/// `hits.total` is an object since ES 7 and a bare count before that.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum RawTotal {
    Object { value: u64 },
    Count(u64),
}

impl RawTotal {
    pub fn value(self) -> u64 {
        match self {
            RawTotal::Object { value } | RawTotal::Count(value) => value,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source", default)]
    pub source: Option<Map<String, Value>>,
}

impl RawSearchResponse {
    pub fn from_value(v: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(v)
    }

    pub fn total(&self) -> u64 {
        self.hits.total.map(RawTotal::value).unwrap_or(0)
    }
}

/// Shape a raw engine response into the paginated API result.
///
/// Each document is a fresh copy of the stored fields with `_id` attached;
/// `raw` is left untouched.
pub fn normalize(raw: &RawSearchResponse, pagination: Pagination) -> SearchResponse {
    let data: Vec<Document> = raw
        .hits
        .hits
        .iter()
        .map(|hit| {
            let mut doc = hit.source.clone().unwrap_or_default();
            doc.insert(ID_FIELD.to_string(), Value::String(hit.id.clone()));
            doc
        })
        .collect();
    let total_results = raw.total();
    SearchResponse {
        results: data.len(),
        data,
        page: pagination.page(),
        total_results,
        has_more: pagination.has_more(total_results),
    }
}
