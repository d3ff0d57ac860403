//! Statement configuration loaded from `logsift.toml`.
//!
//! ```toml
//! strategy = "none"
//!
//! [query_string]
//! default_field = "message"
//! default_operator = "and"
//! analyze_wildcard = true
//! lenient = true
//! ```
//!
//! Every key is optional. [`StatementConfig::save`] writes the commented
//! form produced by [`StatementConfig::to_documented_toml`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dsl::QueryStringOptions;
use crate::error::{QueryError, QueryResult};
use crate::strategy::{MatchStrategy, StrategyKind};

/// Default config file name (lives in project root).
pub const CONFIG_FILE_NAME: &str = "logsift.toml";

/// Which strategy to build with and how to shape its clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementConfig {
    /// Strategy used when the caller does not pick one.
    pub strategy: StrategyKind,

    /// Options stamped onto each generated `query_string`.
    pub query_string: QueryStringOptions,
}

impl StatementConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> QueryResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> QueryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            QueryError::configuration_io(path.display().to_string(), e.to_string()).with_source(e)
        })?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| e.with_input(path.display().to_string()))?;
        debug!(path = %path.display(), strategy = %config.strategy, "Loaded statement config");
        Ok(config)
    }

    /// Render as commented TOML.
    ///
    /// Set options are written as live keys; unset ones appear as commented
    /// examples so the file documents every knob it accepts.
    pub fn to_documented_toml(&self) -> QueryResult<String> {
        let options = &self.query_string;
        let mut out = String::from("# logsift statement configuration\n\n");
        out.push_str("# Match strategy: all, any or none\n");
        out.push_str(&format!("strategy = \"{}\"\n\n", self.strategy));
        out.push_str("# Options applied to every generated query_string clause\n");
        out.push_str("[query_string]\n");
        out.push_str(&toml::to_string(options)?);

        let examples = [
            ("default_field", "\"message\"", options.default_field.is_some()),
            ("default_operator", "\"AND\"", options.default_operator.is_some()),
            ("analyze_wildcard", "true", options.analyze_wildcard.is_some()),
            ("lenient", "true", options.lenient.is_some()),
        ];
        for (key, example, set) in examples {
            if !set {
                out.push_str(&format!("# {} = {}\n", key, example));
            }
        }
        Ok(out)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> QueryResult<()> {
        let content = self.to_documented_toml()?;
        std::fs::write(path, content).map_err(|e| {
            QueryError::configuration_io(path.display().to_string(), e.to_string()).with_source(e)
        })
    }

    /// Instantiate the configured strategy.
    pub fn strategy(&self) -> Box<dyn MatchStrategy> {
        self.strategy.strategy(self.query_string.clone())
    }

    /// Instantiate `kind` with the configured `query_string` options.
    pub fn strategy_for(&self, kind: StrategyKind) -> Box<dyn MatchStrategy> {
        kind.strategy(self.query_string.clone())
    }
}
