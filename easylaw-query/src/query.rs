use serde_json::{json, Value};
use thiserror::Error;

use crate::clause::{Filter, MatchClause, Sort};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("page must be at least 1")]
    ZeroPage,
    #[error("per_page must be at least 1")]
    ZeroPerPage,
}

/// 1-indexed page window. Both fields are non-zero by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Result<Self, QueryError> {
        if page == 0 {
            return Err(QueryError::ZeroPage);
        }
        if per_page == 0 {
            return Err(QueryError::ZeroPerPage);
        }
        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// `(page - 1) * per_page`
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }

    /// True iff results exist past the end of this page.
    pub fn has_more(&self, total_results: u64) -> bool {
        u64::from(self.page) * u64::from(self.per_page) < total_results
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, per_page: DEFAULT_PER_PAGE }
    }
}

/// Query document for one `_search` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineQuery {
    pub must: MatchClause,
    pub filters: Vec<Filter>,
    pub from: u64,
    pub size: u64,
    pub sort: Option<Sort>,
}

impl EngineQuery {
    pub fn to_json(&self) -> Value {
        let filters: Vec<Value> = self.filters.iter().map(Filter::to_json).collect();
        let mut body = json!({
            "query": {
                "bool": {
                    "must": self.must.to_json(),
                    "filter": filters,
                }
            },
            "from": self.from,
            "size": self.size,
        });
        if let (Some(sort), Some(obj)) = (self.sort, body.as_object_mut()) {
            obj.insert("sort".to_string(), sort.to_json());
        }
        body
    }
}
