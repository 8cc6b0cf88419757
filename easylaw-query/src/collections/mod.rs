use crate::clause::{MatchClause, Sort};
use crate::query::{EngineQuery, Pagination};
use crate::rules::{apply_rules, FilterRule};

mod conseil;
mod constitution;
mod laws;
mod supreme_court;

pub use conseil::ConseilParams;
pub use constitution::ConstitutionParams;
pub use laws::LawsParams;
pub use supreme_court::SupremeCourtParams;

/// The searchable document collections and their engine indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    SupremeCourt,
    Laws,
    Constitution,
    Conseil,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::SupremeCourt,
        Collection::Laws,
        Collection::Constitution,
        Collection::Conseil,
    ];

    pub fn index_name(self) -> &'static str {
        match self {
            Collection::SupremeCourt => "supreme-court",
            Collection::Laws => "laws",
            Collection::Constitution => "dostor",
            Collection::Conseil => "conseil",
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Collection::SupremeCourt => "/supreme-court",
            Collection::Laws => "/laws",
            Collection::Constitution => "/constitution",
            Collection::Conseil => "/conseil",
        }
    }

    pub fn from_route(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.route() == path)
    }

    /// Accepted `sort_by` values; each names the field sorted on.
    pub fn sort_keys(self) -> &'static [&'static str] {
        match self {
            Collection::SupremeCourt | Collection::Conseil => &["date"],
            Collection::Laws => &["signature_date", "journal_date"],
            Collection::Constitution => &[],
        }
    }
}

/// Parameters of one collection endpoint, already coerced and validated.
pub trait CollectionSearch {
    fn collection(&self) -> Collection;

    fn pagination(&self) -> Pagination;

    fn build_query(&self) -> EngineQuery;
}

pub(crate) fn compose<P>(
    params: &P,
    must: MatchClause,
    rules: &[FilterRule<P>],
    pagination: Pagination,
    sort: Option<Sort>,
) -> EngineQuery {
    EngineQuery {
        must,
        filters: apply_rules(params, rules),
        from: pagination.offset(),
        size: pagination.limit(),
        sort,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip() {
        for c in Collection::ALL {
            assert_eq!(Collection::from_route(c.route()), Some(c));
        }
        assert_eq!(Collection::from_route("/search"), None);
    }

    #[test]
    fn constitution_lives_in_dostor_index() {
        assert_eq!(Collection::Constitution.index_name(), "dostor");
        assert!(Collection::Constitution.sort_keys().is_empty());
    }
}
