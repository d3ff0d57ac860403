//! Statement match strategies.
//!
//! A strategy turns an ordered list of [`FilterEntity`] values into a single
//! [`BoolQuery`]. Every entity becomes one `query_string` clause; the
//! strategy only decides which occurrence type the clauses land in:
//!
//! | Strategy     | Occurrence  | A document matches when          |
//! |--------------|-------------|----------------------------------|
//! | [`AllMatch`]  | `must`      | every expression matches         |
//! | [`AnyMatch`]  | `should`    | at least one expression matches  |
//! | [`NoneMatch`] | `must_not`  | no expression matches            |
//!
//! An empty entity list always yields an empty bool query, which the engine
//! evaluates as match-all.
//!
//! ```rust
//! use logsift_query::{FilterEntity, MatchStrategy, NoneMatch};
//!
//! let entities = vec![FilterEntity::new("status:500"), FilterEntity::new("level:DEBUG")];
//! let query = NoneMatch::new().build(&entities);
//!
//! assert_eq!(query.must_not.len(), 2);
//! assert!(query.must.is_empty());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dsl::{BoolQuery, QueryStringOptions};
use crate::entity::FilterEntity;
use crate::error::QueryError;

/// Builds a boolean query from filter entities.
///
/// Implementations are stateless apart from their options, so one instance
/// can serve concurrent callers.
pub trait MatchStrategy: Send + Sync + fmt::Debug {
    /// The tag this strategy is selected by.
    fn kind(&self) -> StrategyKind;

    /// Build a query with one clause per entity, in input order.
    fn build(&self, entities: &[FilterEntity]) -> BoolQuery;
}

/// Every entity must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllMatch {
    options: QueryStringOptions,
}

/// At least one entity must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnyMatch {
    options: QueryStringOptions,
}

/// No entity may match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoneMatch {
    options: QueryStringOptions,
}

macro_rules! strategy_ctors {
    ($($ty:ident),+) => {
        $(
            impl $ty {
                /// Create the strategy with default `query_string` options.
                pub fn new() -> Self {
                    Self::default()
                }

                /// Create the strategy with the given `query_string` options.
                pub fn with_options(options: QueryStringOptions) -> Self {
                    Self { options }
                }

                /// Options applied to each generated clause.
                pub fn options(&self) -> &QueryStringOptions {
                    &self.options
                }
            }
        )+
    };
}

strategy_ctors!(AllMatch, AnyMatch, NoneMatch);

impl MatchStrategy for AllMatch {
    fn kind(&self) -> StrategyKind {
        StrategyKind::All
    }

    fn build(&self, entities: &[FilterEntity]) -> BoolQuery {
        let query = entities.iter().fold(BoolQuery::new(), |query, entity| {
            query.must(self.options.apply(entity.expression()))
        });
        debug!(strategy = %self.kind(), clauses = query.must.len(), "Built statement query");
        query
    }
}

impl MatchStrategy for AnyMatch {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Any
    }

    fn build(&self, entities: &[FilterEntity]) -> BoolQuery {
        let mut query = entities.iter().fold(BoolQuery::new(), |query, entity| {
            query.should(self.options.apply(entity.expression()))
        });
        // should-only bools already need one match, but state it so the
        // clause survives being nested under a must or filter
        if !query.should.is_empty() {
            query = query.minimum_should_match(1);
        }
        debug!(strategy = %self.kind(), clauses = query.should.len(), "Built statement query");
        query
    }
}

impl MatchStrategy for NoneMatch {
    fn kind(&self) -> StrategyKind {
        StrategyKind::NoneOf
    }

    fn build(&self, entities: &[FilterEntity]) -> BoolQuery {
        let query = entities.iter().fold(BoolQuery::new(), |query, entity| {
            query.must_not(self.options.apply(entity.expression()))
        });
        debug!(strategy = %self.kind(), clauses = query.must_not.len(), "Built statement query");
        query
    }
}

/// Tag selecting a [`MatchStrategy`] at configuration time.
///
/// Parses case-insensitively from `all`/`and`/`must`, `any`/`or`/`should`
/// and `none`/`not`/`must_not`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum StrategyKind {
    /// [`AllMatch`].
    All,
    /// [`AnyMatch`].
    Any,
    /// [`NoneMatch`].
    #[default]
    #[serde(rename = "none")]
    NoneOf,
}

impl StrategyKind {
    /// All strategy kinds.
    pub const VARIANTS: [StrategyKind; 3] = [Self::All, Self::Any, Self::NoneOf];

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Any => "any",
            Self::NoneOf => "none",
        }
    }

    /// Instantiate the strategy with the given `query_string` options.
    pub fn strategy(self, options: QueryStringOptions) -> Box<dyn MatchStrategy> {
        match self {
            Self::All => Box::new(AllMatch::with_options(options)),
            Self::Any => Box::new(AnyMatch::with_options(options)),
            Self::NoneOf => Box::new(NoneMatch::with_options(options)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "and" | "must" => Ok(Self::All),
            "any" | "or" | "should" => Ok(Self::Any),
            "none" | "not" | "must_not" => Ok(Self::NoneOf),
            _ => Err(QueryError::invalid_strategy(s)),
        }
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
