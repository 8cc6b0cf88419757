use easylaw_api::request::ParamError;
use easylaw_api::response::SearchResponse;
use easylaw_es::{EsError, SearchEngine};
use easylaw_query::{normalize, CollectionSearch, QueryError, RawSearchResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error(transparent)]
    Pagination(#[from] QueryError),

    #[error("search engine call failed: {0}")]
    Engine(#[from] EsError),

    #[error("unexpected engine response shape: {0}")]
    Shape(#[source] serde_json::Error),
}

impl SearchError {
    /// True when the caller sent bad input, as opposed to a backend failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SearchError::Param(_) | SearchError::Pagination(_))
    }
}

/// Build the collection query, run it once, and normalize the hits.
pub async fn run<P>(engine: &dyn SearchEngine, params: &P) -> Result<SearchResponse, SearchError>
where
    P: CollectionSearch + ?Sized,
{
    let index = params.collection().index_name();
    let body = params.build_query().to_json();
    let raw = engine.search(index, &body).await?;
    let raw = RawSearchResponse::from_value(raw).map_err(SearchError::Shape)?;
    Ok(normalize(&raw, params.pagination()))
}
