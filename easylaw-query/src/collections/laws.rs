use crate::clause::{BoostedField, FilterOp, MatchClause};
use crate::query::{EngineQuery, Pagination};
use crate::rules::{pick_sort, text, text_match, FilterRule};

use super::{compose, Collection, CollectionSearch};

const FIELDS: &[BoostedField] = &[
    BoostedField::boosted("content", 2),
    BoostedField::plain("long_content"),
];

type Rule = FilterRule<LawsParams>;

const FILTERS: &[Rule] = &[
    Rule::new("signature_date", FilterOp::RangeFrom, |p| text(&p.signature_start_date)),
    Rule::new("signature_date", FilterOp::RangeTo, |p| text(&p.signature_end_date)),
    Rule::new("journal_date", FilterOp::RangeFrom, |p| text(&p.journal_start_date)),
    Rule::new("journal_date", FilterOp::RangeTo, |p| text(&p.journal_end_date)),
    Rule::new("text_type", FilterOp::Equals, |p| text(&p.text_type)),
    Rule::new("text_number", FilterOp::Equals, |p| text(&p.text_number)),
    Rule::new("ministry", FilterOp::Equals, |p| text(&p.ministry)),
    Rule::new("field", FilterOp::Equals, |p| text(&p.field)),
];

/// Laws and regulations, filterable by signature and official journal dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LawsParams {
    pub search_query: String,
    pub pagination: Pagination,
    pub signature_start_date: Option<String>,
    pub signature_end_date: Option<String>,
    pub journal_start_date: Option<String>,
    pub journal_end_date: Option<String>,
    pub text_type: Option<String>,
    /// Kept as text: law numbers carry separators such as `08-12`.
    pub text_number: Option<String>,
    pub ministry: Option<String>,
    pub field: Option<String>,
    pub sort_by: String,
}

impl CollectionSearch for LawsParams {
    fn collection(&self) -> Collection {
        Collection::Laws
    }

    fn pagination(&self) -> Pagination {
        self.pagination
    }

    fn build_query(&self) -> EngineQuery {
        let must = text_match(&self.search_query, || MatchClause::MultiField {
            query: self.search_query.clone(),
            fields: FIELDS,
        });
        let sort = pick_sort(&self.sort_by, self.collection().sort_keys());
        compose(self, must, FILTERS, self.pagination, sort)
    }
}
