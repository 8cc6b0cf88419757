use crate::clause::{FilterOp, MatchClause};
use crate::query::{EngineQuery, Pagination};
use crate::rules::{integer, text, text_match, FilterRule};

use super::{compose, Collection, CollectionSearch};

const TEXT_FIELD: &str = "article_text";

type Rule = FilterRule<ConstitutionParams>;

const FILTERS: &[Rule] = &[
    Rule::new("section_name", FilterOp::Equals, |p| text(&p.section_name)),
    Rule::new("chapter_name", FilterOp::Equals, |p| text(&p.chapter_name)),
    Rule::new("section_number", FilterOp::Equals, |p| integer(p.section_number)),
    Rule::new("chapter_number", FilterOp::Equals, |p| integer(p.chapter_number)),
    Rule::new("article_number", FilterOp::Equals, |p| integer(p.article_number)),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstitutionParams {
    pub search_query: String,
    pub pagination: Pagination,
    pub section_name: Option<String>,
    pub chapter_name: Option<String>,
    pub section_number: Option<i64>,
    pub chapter_number: Option<i64>,
    pub article_number: Option<i64>,
}

impl CollectionSearch for ConstitutionParams {
    fn collection(&self) -> Collection {
        Collection::Constitution
    }

    fn pagination(&self) -> Pagination {
        self.pagination
    }

    // Articles are always returned in relevance order.
    fn build_query(&self) -> EngineQuery {
        let must = text_match(&self.search_query, || MatchClause::Field {
            field: TEXT_FIELD.to_string(),
            query: self.search_query.clone(),
        });
        compose(self, must, FILTERS, self.pagination, None)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_matches_article_body_only() {
        let p = ConstitutionParams { search_query: "liberté".into(), ..Default::default() };
        assert_eq!(
            p.build_query().to_json()["query"]["bool"]["must"],
            json!({"match": {"article_text": "liberté"}})
        );
    }

    #[test]
    fn numeric_filters_are_integers() {
        let p = ConstitutionParams {
            chapter_number: Some(2),
            article_number: Some(41),
            ..Default::default()
        };
        assert_eq!(
            p.build_query().to_json()["query"]["bool"]["filter"],
            json!([
                {"term": {"chapter_number": {"value": 2}}},
                {"term": {"article_number": {"value": 41}}}
            ])
        );
    }
}
