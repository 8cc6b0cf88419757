use crate::clause::{BoostedField, FilterOp, MatchClause};
use crate::query::{EngineQuery, Pagination};
use crate::rules::{integer, pick_sort, text, text_match, FilterRule};

use super::{compose, Collection, CollectionSearch};

const FIELDS: &[BoostedField] = &[
    BoostedField::boosted("subject", 2),
    BoostedField::plain("principle"),
];

type Rule = FilterRule<ConseilParams>;

const FILTERS: &[Rule] = &[
    Rule::new("number", FilterOp::Equals, |p| integer(p.number)),
    Rule::new("chamber", FilterOp::Equals, |p| text(&p.chamber)),
    Rule::new("section", FilterOp::Equals, |p| text(&p.section)),
    Rule::new("procedure", FilterOp::Equals, |p| text(&p.procedure)),
    Rule::new("date", FilterOp::RangeFrom, |p| text(&p.start_date)),
    Rule::new("date", FilterOp::RangeTo, |p| text(&p.end_date)),
];

/// Council of State rulings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConseilParams {
    pub search_query: String,
    pub pagination: Pagination,
    pub number: Option<i64>,
    pub chamber: Option<String>,
    pub section: Option<String>,
    pub procedure: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort_by: String,
}

impl CollectionSearch for ConseilParams {
    fn collection(&self) -> Collection {
        Collection::Conseil
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
