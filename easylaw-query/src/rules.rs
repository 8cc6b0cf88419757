use crate::clause::{Filter, FilterOp, FilterValue, MatchClause, Sort};

/// Maps one optional request parameter to at most one filter clause.
pub(crate) struct FilterRule<P> {
    pub field: &'static str,
    pub op: FilterOp,
    pub value: fn(&P) -> Option<FilterValue>,
}

impl<P> FilterRule<P> {
    pub const fn new(
        field: &'static str,
        op: FilterOp,
        value: fn(&P) -> Option<FilterValue>,
    ) -> Self {
        Self { field, op, value }
    }
}

/// Evaluate rules in table order; absent parameters contribute nothing.
pub(crate) fn apply_rules<P>(params: &P, rules: &[FilterRule<P>]) -> Vec<Filter> {
    rules
        .iter()
        .filter_map(|r| {
            (r.value)(params).map(|value| Filter { field: r.field, op: r.op, value })
        })
        .collect()
}

pub(crate) fn text(v: &Option<String>) -> Option<FilterValue> {
    v.as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| FilterValue::Text(s.to_string()))
}

/// Zero counts as absent.
pub(crate) fn integer(v: Option<i64>) -> Option<FilterValue> {
    v.filter(|n| *n != 0).map(FilterValue::Integer)
}

/// Unknown keys, including "relevance", fall back to engine scoring.
pub(crate) fn pick_sort(sort_by: &str, keys: &'static [&'static str]) -> Option<Sort> {
    keys.iter()
        .copied()
        .find(|k| *k == sort_by)
        .map(|field| Sort { field })
}

/// Empty text matches everything; otherwise the per-collection clause.
pub(crate) fn text_match(query: &str, otherwise: impl FnOnce() -> MatchClause) -> MatchClause {
    if query.is_empty() {
        MatchClause::All
    } else {
        otherwise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct P {
        a: Option<String>,
        n: Option<i64>,
    }

    type Rule = FilterRule<P>;

    const RULES: &[Rule] = &[
        Rule::new("a", FilterOp::Equals, |p| text(&p.a)),
        Rule::new("n", FilterOp::Equals, |p| integer(p.n)),
    ];

    #[test]
    fn empty_and_zero_are_absent() {
        let p = P { a: Some(String::new()), n: Some(0) };
        assert!(apply_rules(&p, RULES).is_empty());
    }

    #[test]
    fn rules_keep_table_order() {
        let p = P { a: Some("x".into()), n: Some(3) };
        let fields: Vec<_> = apply_rules(&p, RULES).iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["a", "n"]);
    }

    #[test]
    fn unknown_sort_is_none() {
        assert_eq!(pick_sort("relevance", &["date"]), None);
        assert_eq!(pick_sort("title", &["date"]), None);
        assert_eq!(pick_sort("date", &["date"]), Some(Sort { field: "date" }));
    }
}
