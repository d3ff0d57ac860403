//! Filter entities: the caller-supplied expressions a strategy combines.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{QueryError, QueryResult};

/// One field/value filter expression.
///
/// `expression` is handed to the engine's query parser unchanged. `field`
/// records which log field the expression was built for; strategies never
/// read it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterEntity {
    /// The log field the expression targets, if known.
    #[serde(
        default,
        alias = "fieldKey",
        alias = "field_key",
        skip_serializing_if = "Option::is_none"
    )]
    field: Option<SmolStr>,
    /// Query-string expression, e.g. `status:500`.
    #[serde(alias = "fieldValue", alias = "field_value")]
    expression: String,
}

impl FilterEntity {
    /// Create an entity from an expression.
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            field: None,
            expression: expression.into(),
        }
    }

    /// Record the field the expression targets.
    pub fn with_field(mut self, field: impl Into<SmolStr>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// The query-string expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The targeted field, if recorded.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Decode a JSON array of entities.
    pub fn parse_list(json: &str) -> QueryResult<Vec<FilterEntity>> {
        serde_json::from_str(json)
            .map_err(|e| QueryError::invalid_entity(e.to_string()).with_source(e))
    }
}

impl From<&str> for FilterEntity {
    fn from(expression: &str) -> Self {
        Self::new(expression)
    }
}

impl From<String> for FilterEntity {
    fn from(expression: String) -> Self {
        Self::new(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_new_and_field() {
        let entity = FilterEntity::new("status:500").with_field("status");
        assert_eq!(entity.expression(), "status:500");
        assert_eq!(entity.field(), Some("status"));
    }

    #[test]
    fn test_parse_list() {
        let entities = FilterEntity::parse_list(
            r#"[{"expression": "level:ERROR"}, {"fieldKey": "host", "fieldValue": "host:web-1"}]"#,
        )
        .unwrap();

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].expression(), "level:ERROR");
        assert_eq!(entities[0].field(), None);
        assert_eq!(entities[1].expression(), "host:web-1");
        assert_eq!(entities[1].field(), Some("host"));
    }

    #[test]
    fn test_parse_empty_list() {
        let entities = FilterEntity::parse_list("[]").unwrap();
        assert!(entities.is_empty());
    }

    #[test]
    fn test_parse_list_missing_expression() {
        let err = FilterEntity::parse_list(r#"[{"field": "status"}]"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEntity);
        assert!(err.message.contains("expression"));
    }

    #[test]
    fn test_parse_list_not_an_array() {
        let err = FilterEntity::parse_list(r#"{"expression": "a"}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEntity);
    }

    #[test]
    fn test_from_str() {
        let entity: FilterEntity = "service:api".into();
        assert_eq!(entity.expression(), "service:api");
    }
}
