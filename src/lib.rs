//! # logsift
//!
//! Compile log filter expressions into Elasticsearch boolean queries.
//!
//! logsift provides:
//! - Interchangeable match strategies: all, any or none of the filters must match
//! - Typed query DSL serialized to the engine's JSON
//! - TOML configuration for the default strategy and `query_string` options
//!
//! ## Quick Start
//!
//! ```rust
//! use logsift::prelude::*;
//!
//! let entities = vec![FilterEntity::new("status:500"), FilterEntity::new("level:DEBUG")];
//!
//! let config = StatementConfig::default();
//! let query = config.strategy().build(&entities);
//!
//! assert_eq!(query.must_not.len(), 2);
//! println!("{}", query.to_json_pretty().unwrap());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Strategies, query DSL, entities and configuration.
pub mod query {
    pub use logsift_query::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use logsift_query::prelude::*;
}

// Re-export key types at the crate root
pub use query::{BoolQuery, FilterEntity, MatchStrategy, QueryError, StrategyKind};
