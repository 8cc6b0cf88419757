use crate::clause::{BoostedField, FilterOp, MatchClause};
use crate::query::{EngineQuery, Pagination};
use crate::rules::{integer, pick_sort, text, text_match, FilterRule};

use super::{compose, Collection, CollectionSearch};

const FIELDS: &[BoostedField] = &[
    BoostedField::plain("subject"),
    BoostedField::plain("parties"),
    BoostedField::plain("keywords"),
    BoostedField::plain("reference"),
    BoostedField::plain("principle"),
    BoostedField::plain("ground_of_appeal"),
    BoostedField::plain("supreme_court_response"),
    BoostedField::plain("verdict"),
    BoostedField::plain("president"),
    BoostedField::plain("reporting_judge"),
];

type Rule = FilterRule<SupremeCourtParams>;

const FILTERS: &[Rule] = &[
    Rule::new("date", FilterOp::RangeFrom, |p| text(&p.start_date)),
    Rule::new("date", FilterOp::RangeTo, |p| text(&p.end_date)),
    Rule::new("subject.keyword", FilterOp::Equals, |p| text(&p.subject)),
    Rule::new("number", FilterOp::Equals, |p| integer(p.number)),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupremeCourtParams {
    pub search_query: String,
    pub pagination: Pagination,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Restrict the text match to this one field instead of the default set.
    pub search_field: Option<String>,
    pub subject: Option<String>,
    pub number: Option<i64>,
    pub sort_by: String,
}

impl CollectionSearch for SupremeCourtParams {
    fn collection(&self) -> Collection {
        Collection::SupremeCourt
    }

    fn pagination(&self) -> Pagination {
        self.pagination
    }

    fn build_query(&self) -> EngineQuery {
        let must = text_match(&self.search_query, || {
            match self.search_field.as_deref().filter(|f| !f.is_empty()) {
                Some(field) => MatchClause::Field {
                    field: field.to_string(),
                    query: self.search_query.clone(),
                },
                None => MatchClause::MultiField {
                    query: self.search_query.clone(),
                    fields: FIELDS,
                },
            }
        });
        let sort = pick_sort(&self.sort_by, self.collection().sort_keys());
        compose(self, must, FILTERS, self.pagination, sort)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn search_field_overrides_multi_match() {
        let p = SupremeCourtParams {
            search_query: "bail".into(),
            search_field: Some("verdict".into()),
            ..Default::default()
        };
        assert_eq!(
            p.build_query().to_json()["query"]["bool"]["must"],
            json!({"match": {"verdict": "bail"}})
        );
    }

    #[test]
    fn empty_search_field_is_ignored() {
        let p = SupremeCourtParams {
            search_query: "bail".into(),
            search_field: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(p.build_query().must, MatchClause::MultiField { .. }));
    }

    #[test]
    fn search_field_is_ignored_for_empty_text() {
        let p = SupremeCourtParams {
            search_field: Some("verdict".into()),
            ..Default::default()
        };
        assert_eq!(p.build_query().must, MatchClause::All);
    }

    #[test]
    fn subject_filters_on_keyword_subfield() {
        let p = SupremeCourtParams { subject: Some("civil".into()), ..Default::default() };
        assert_eq!(
            p.build_query().to_json()["query"]["bool"]["filter"],
            json!([{"term": {"subject.keyword": {"value": "civil"}}}])
        );
    }
}
