//! # logsift-query
//!
//! Statement match strategies that compile log filter entities into
//! Elasticsearch boolean queries.
//!
//! This crate provides:
//! - [`FilterEntity`], one caller-supplied query-string expression
//! - The [`MatchStrategy`] capability with [`AllMatch`], [`AnyMatch`] and
//!   [`NoneMatch`] implementations
//! - Typed query DSL ([`BoolQuery`], [`Query`]) serialized to engine JSON
//! - TOML configuration selecting the strategy and `query_string` options
//!
//! ## Excluding matches
//!
//! ```rust
//! use logsift_query::{FilterEntity, MatchStrategy, NoneMatch};
//!
//! let entities = vec![FilterEntity::new("status:500")];
//! let query = NoneMatch::new().build(&entities);
//!
//! assert_eq!(
//!     query.to_json().unwrap(),
//!     r#"{"bool":{"must_not":[{"query_string":{"query":"status:500"}}]}}"#
//! );
//! ```
//!
//! ## Choosing a strategy at runtime
//!
//! ```rust
//! use logsift_query::{FilterEntity, MatchStrategy, QueryStringOptions, StrategyKind};
//!
//! let kind: StrategyKind = "any".parse().unwrap();
//! let strategy = kind.strategy(QueryStringOptions::default());
//!
//! let query = strategy.build(&[FilterEntity::new("level:ERROR"), FilterEntity::new("level:WARN")]);
//! assert_eq!(query.should.len(), 2);
//! assert_eq!(query.minimum_should_match, Some(1));
//! ```

pub mod config;
pub mod dsl;
pub mod entity;
pub mod error;
pub mod logging;
pub mod strategy;

pub use config::{CONFIG_FILE_NAME, StatementConfig};
pub use dsl::{BoolQuery, MatchAllQuery, Operator, Query, QueryStringOptions, QueryStringQuery};
pub use entity::FilterEntity;
pub use error::{ErrorCode, QueryError, QueryResult};
pub use strategy::{AllMatch, AnyMatch, MatchStrategy, NoneMatch, StrategyKind};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StatementConfig;
    pub use crate::dsl::{BoolQuery, Query, QueryStringOptions};
    pub use crate::entity::FilterEntity;
    pub use crate::error::{QueryError, QueryResult};
    pub use crate::strategy::{AllMatch, AnyMatch, MatchStrategy, NoneMatch, StrategyKind};
}
