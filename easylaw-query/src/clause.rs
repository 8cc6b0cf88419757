use serde_json::{json, Map, Value};

/// Literal compared against an indexed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
}

impl FilterValue {
    fn to_json(&self) -> Value {
        match self {
            FilterValue::Text(s) => Value::from(s.as_str()),
            FilterValue::Integer(n) => Value::from(*n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact `term` match.
    Equals,
    /// Inclusive lower bound (`gte`).
    RangeFrom,
    /// Inclusive upper bound (`lte`).
    RangeTo,
}

/// One conjunctive condition in the `bool.filter` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: &'static str,
    pub op: FilterOp,
    pub value: FilterValue,
}

impl Filter {
    pub fn to_json(&self) -> Value {
        let value = self.value.to_json();
        match self.op {
            FilterOp::Equals => keyed("term", keyed(self.field, json!({ "value": value }))),
            FilterOp::RangeFrom => keyed("range", keyed(self.field, json!({ "gte": value }))),
            FilterOp::RangeTo => keyed("range", keyed(self.field, json!({ "lte": value }))),
        }
    }
}

/// A searched field with an optional relevance multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoostedField {
    pub name: &'static str,
    pub boost: Option<u32>,
}

impl BoostedField {
    pub const fn plain(name: &'static str) -> Self {
        Self { name, boost: None }
    }

    pub const fn boosted(name: &'static str, boost: u32) -> Self {
        Self { name, boost: Some(boost) }
    }

    /// Engine notation: `content^2`, or the bare name when unboosted.
    pub fn render(&self) -> String {
        match self.boost {
            Some(b) => format!("{}^{}", self.name, b),
            None => self.name.to_string(),
        }
    }
}

/// The scoring (`bool.must`) part of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchClause {
    All,
    Field { field: String, query: String },
    MultiField { query: String, fields: &'static [BoostedField] },
}

impl MatchClause {
    pub fn to_json(&self) -> Value {
        match self {
            MatchClause::All => json!({ "match_all": {} }),
            MatchClause::Field { field, query } => {
                keyed("match", keyed(field, Value::from(query.as_str())))
            }
            MatchClause::MultiField { query, fields } => {
                let fields: Vec<String> = fields.iter().map(BoostedField::render).collect();
                json!({ "multi_match": { "query": query, "fields": fields } })
            }
        }
    }
}

/// Explicit ordering on a field, always newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: &'static str,
}

impl Sort {
    pub fn to_json(&self) -> Value {
        json!([keyed(self.field, json!({ "order": "desc" }))])
    }
}

fn keyed(key: &str, value: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(key.to_string(), value);
    Value::Object(map)
}
