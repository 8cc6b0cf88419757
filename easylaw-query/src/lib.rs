//! Translation of collection search parameters into Elasticsearch query
//! documents, and of raw engine responses into paginated API results.
//!
//! Everything here is pure: no I/O, no shared state.

pub mod clause;
pub mod collections;
pub mod normalize;
pub mod query;
mod rules;

pub use clause::{BoostedField, Filter, FilterOp, FilterValue, MatchClause, Sort};
pub use collections::{
    Collection, CollectionSearch, ConseilParams, ConstitutionParams, LawsParams,
    SupremeCourtParams,
};
pub use normalize::{normalize, RawHit, RawHits, RawSearchResponse, RawTotal, ID_FIELD};
pub use query::{EngineQuery, Pagination, QueryError, DEFAULT_PAGE, DEFAULT_PER_PAGE};
