//! Elasticsearch query DSL types emitted by the match strategies.
//!
//! Only the clauses logsift produces are modeled. Everything serializes to
//! the JSON the engine expects:
//!
//! ```rust
//! use logsift_query::dsl::{BoolQuery, Query};
//!
//! let query = BoolQuery::new().must_not(Query::query_string("status:500"));
//! assert_eq!(
//!     query.to_json().unwrap(),
//!     r#"{"bool":{"must_not":[{"query_string":{"query":"status:500"}}]}}"#
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::error::QueryResult;

/// A single query node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    /// Free-text expression parsed with the engine's query syntax.
    QueryString(QueryStringQuery),
    /// Boolean combination of sub-queries.
    Bool(BoolQuery),
    /// Matches every document.
    MatchAll(MatchAllQuery),
}

impl Query {
    /// Create a `query_string` query with no extra options.
    pub fn query_string(query: impl Into<String>) -> Self {
        Self::QueryString(QueryStringQuery::new(query))
    }

    /// Create a `match_all` query.
    pub fn match_all() -> Self {
        Self::MatchAll(MatchAllQuery {})
    }

    /// The expression of a `query_string` node.
    pub fn as_query_string(&self) -> Option<&str> {
        match self {
            Self::QueryString(q) => Some(&q.query),
            _ => None,
        }
    }
}

impl From<BoolQuery> for Query {
    fn from(query: BoolQuery) -> Self {
        Self::Bool(query)
    }
}

impl From<QueryStringQuery> for Query {
    fn from(query: QueryStringQuery) -> Self {
        Self::QueryString(query)
    }
}

/// `{"match_all": {}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchAllQuery {}

/// Operator joining the terms of a `query_string` when none is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Every term must match.
    #[serde(rename = "AND", alias = "and", alias = "And")]
    And,
    /// Any term may match.
    #[serde(rename = "OR", alias = "or", alias = "Or")]
    Or,
}

/// `{"query_string": {...}}`
///
/// `query` is passed through verbatim. Syntax errors in it are reported by
/// the engine at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryStringQuery {
    /// The expression, e.g. `level:ERROR AND service:api`.
    pub query: String,
    /// Field searched when the expression names none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_field: Option<String>,
    /// Operator between bare terms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_operator: Option<Operator>,
    /// Analyze wildcard terms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyze_wildcard: Option<bool>,
    /// Ignore format-based failures such as text in a numeric field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lenient: Option<bool>,
}

impl QueryStringQuery {
    /// Create a query with only the expression set.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            default_field: None,
            default_operator: None,
            analyze_wildcard: None,
            lenient: None,
        }
    }
}

/// Options stamped onto every `query_string` a strategy generates.
///
/// The default leaves every option unset, so generated queries carry only
/// the expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryStringOptions {
    /// See [`QueryStringQuery::default_field`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_field: Option<String>,
    /// See [`QueryStringQuery::default_operator`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_operator: Option<Operator>,
    /// See [`QueryStringQuery::analyze_wildcard`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyze_wildcard: Option<bool>,
    /// See [`QueryStringQuery::lenient`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lenient: Option<bool>,
}

impl QueryStringOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default field.
    pub fn default_field(mut self, field: impl Into<String>) -> Self {
        self.default_field = Some(field.into());
        self
    }

    /// Set the default operator.
    pub fn default_operator(mut self, operator: Operator) -> Self {
        self.default_operator = Some(operator);
        self
    }

    /// Enable or disable wildcard analysis.
    pub fn analyze_wildcard(mut self, enabled: bool) -> Self {
        self.analyze_wildcard = Some(enabled);
        self
    }

    /// Enable or disable lenient parsing.
    pub fn lenient(mut self, enabled: bool) -> Self {
        self.lenient = Some(enabled);
        self
    }

    /// Build a `query_string` query for `expression` with these options.
    pub fn apply(&self, expression: &str) -> Query {
        Query::QueryString(QueryStringQuery {
            query: expression.to_string(),
            default_field: self.default_field.clone(),
            default_operator: self.default_operator,
            analyze_wildcard: self.analyze_wildcard,
            lenient: self.lenient,
        })
    }
}

/// `{"bool": {...}}`
///
/// With no clauses at all the engine treats the query as match-all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolQuery {
    /// Clauses that must match and contribute to the score.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<Query>,
    /// Clauses of which at least `minimum_should_match` must match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub should: Vec<Query>,
    /// Clauses that must not match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must_not: Vec<Query>,
    /// Clauses that must match, without scoring.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Query>,
    /// Minimum number of `should` clauses that must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<usize>,
}

#[derive(Serialize)]
struct Wrapped<'a> {
    bool: &'a BoolQuery,
}

impl BoolQuery {
    /// Create an empty boolean query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `must` clause.
    pub fn must(mut self, query: impl Into<Query>) -> Self {
        self.must.push(query.into());
        self
    }

    /// Add a `should` clause.
    pub fn should(mut self, query: impl Into<Query>) -> Self {
        self.should.push(query.into());
        self
    }

    /// Add a `must_not` clause.
    pub fn must_not(mut self, query: impl Into<Query>) -> Self {
        self.must_not.push(query.into());
        self
    }

    /// Add a `filter` clause.
    pub fn filter(mut self, query: impl Into<Query>) -> Self {
        self.filter.push(query.into());
        self
    }

    /// Set `minimum_should_match`.
    pub fn minimum_should_match(mut self, count: usize) -> Self {
        self.minimum_should_match = Some(count);
        self
    }

    /// Total number of clauses across all occurrence types.
    pub fn clause_count(&self) -> usize {
        self.must.len() + self.should.len() + self.must_not.len() + self.filter.len()
    }

    /// Check if the query has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clause_count() == 0
    }

    /// Serialize as `{"bool": {...}}`.
    pub fn to_json(&self) -> QueryResult<String> {
        Ok(serde_json::to_string(&Wrapped { bool: self })?)
    }

    /// Serialize as indented `{"bool": {...}}`.
    pub fn to_json_pretty(&self) -> QueryResult<String> {
        Ok(serde_json::to_string_pretty(&Wrapped { bool: self })?)
    }

    /// Convert to a JSON value shaped `{"bool": {...}}`.
    pub fn to_value(&self) -> QueryResult<serde_json::Value> {
        Ok(serde_json::to_value(Wrapped { bool: self })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_bool_serializes_to_empty_object() {
        let query = BoolQuery::new();
        assert!(query.is_empty());
        assert_eq!(query.to_value().unwrap(), json!({ "bool": {} }));
    }

    #[test]
    fn test_query_string_omits_unset_options() {
        let value = serde_json::to_value(Query::query_string("level:ERROR")).unwrap();
        assert_eq!(value, json!({ "query_string": { "query": "level:ERROR" } }));
    }

    #[test]
    fn test_options_are_applied() {
        let options = QueryStringOptions::new()
            .default_field("message")
            .default_operator(Operator::And)
            .analyze_wildcard(true);

        let value = serde_json::to_value(options.apply("timeout*")).unwrap();
        assert_eq!(
            value,
            json!({
                "query_string": {
                    "query": "timeout*",
                    "default_field": "message",
                    "default_operator": "AND",
                    "analyze_wildcard": true
                }
            })
        );
    }

    #[test]
    fn test_bool_clauses() {
        let query = BoolQuery::new()
            .must(Query::query_string("a"))
            .should(Query::query_string("b"))
            .should(Query::query_string("c"))
            .minimum_should_match(1)
            .filter(Query::match_all())
            .must_not(Query::query_string("d"));

        assert_eq!(query.clause_count(), 5);
        assert_eq!(
            query.to_value().unwrap(),
            json!({
                "bool": {
                    "must": [{ "query_string": { "query": "a" } }],
                    "should": [
                        { "query_string": { "query": "b" } },
                        { "query_string": { "query": "c" } }
                    ],
                    "must_not": [{ "query_string": { "query": "d" } }],
                    "filter": [{ "match_all": {} }],
                    "minimum_should_match": 1
                }
            })
        );
    }

    #[test]
    fn test_nested_bool() {
        let inner = BoolQuery::new().must_not(Query::query_string("x"));
        let outer = BoolQuery::new().filter(inner);

        assert_eq!(
            outer.to_value().unwrap(),
            json!({
                "bool": {
                    "filter": [{ "bool": { "must_not": [{ "query_string": { "query": "x" } }] } }]
                }
            })
        );
    }

    #[test]
    fn test_operator_accepts_lowercase() {
        let op: Operator = serde_json::from_str("\"and\"").unwrap();
        assert_eq!(op, Operator::And);
        assert_eq!(serde_json::to_string(&Operator::Or).unwrap(), "\"OR\"");
    }

    #[test]
    fn test_bool_deserializes_from_engine_json() {
        let query: Query = serde_json::from_value(json!({
            "bool": { "must_not": [{ "query_string": { "query": "status:500" } }] }
        }))
        .unwrap();

        let Query::Bool(bool_query) = query else {
            panic!("expected a bool query");
        };
        assert_eq!(bool_query.must_not.len(), 1);
        assert_eq!(bool_query.must_not[0].as_query_string(), Some("status:500"));
    }
}
