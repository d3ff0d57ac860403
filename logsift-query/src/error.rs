//! Error types for statement building with actionable messages.
//!
//! Building a query from entities never fails. Errors come from the edges
//! around it: decoding entity lists, reading configuration, resolving
//! strategy names and serializing the finished query.
//!
//! # Error Codes
//!
//! Error codes follow a pattern: LS{category}{number}
//! - 1xxx: Input errors (entities, strategy names)
//! - 6xxx: Data errors (serialization)
//! - 7xxx: Configuration errors
//!
//! ```rust
//! use logsift_query::{ErrorCode, QueryError};
//!
//! let err = QueryError::invalid_strategy("sometimes");
//! assert_eq!(err.code, ErrorCode::InvalidStrategy);
//! assert!(err.to_string().starts_with("[LS1002]"));
//! ```

use std::fmt;
use thiserror::Error;

/// Result type for logsift operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors (1xxx)
    /// Entity list could not be decoded (LS1001).
    InvalidEntity = 1001,
    /// Unknown match strategy name (LS1002).
    InvalidStrategy = 1002,

    // Data errors (6xxx)
    /// Query could not be serialized (LS6001).
    SerializationError = 6001,

    // Configuration errors (7xxx)
    /// Configuration could not be parsed (LS7001).
    InvalidConfiguration = 7001,
    /// Configuration file could not be read or written (LS7002).
    ConfigurationIo = 7002,
}

impl ErrorCode {
    /// Get the error code string (e.g., "LS1001").
    pub fn code(&self) -> String {
        format!("LS{}", *self as u16)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Additional context for an error.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation that was being performed.
    pub operation: Option<String>,
    /// The input involved (a file path, a strategy name).
    pub input: Option<String>,
    /// Suggestions for fixing the error.
    pub suggestions: Vec<String>,
    /// Help text.
    pub help: Option<String>,
}

/// Errors raised around statement building.
#[derive(Error, Debug)]
pub struct QueryError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// Additional context.
    pub context: ErrorContext,
    /// The source error (if any).
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl QueryError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add context about the operation.
    pub fn with_context(mut self, operation: impl Into<String>) -> Self {
        self.context.operation = Some(operation.into());
        self
    }

    /// Record the input that caused the error.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.context.input = Some(input.into());
        self
    }

    /// Add a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.context.suggestions.push(suggestion.into());
        self
    }

    /// Add help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    /// Set the source error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // ============== Constructor Functions ==============

    /// Create an error for an entity list that failed to decode.
    pub fn invalid_entity(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(
            ErrorCode::InvalidEntity,
            format!("Invalid filter entity list: {}", message),
        )
        .with_suggestion("Pass a JSON array of objects such as [{\"expression\": \"status:500\"}]")
        .with_help("`fieldValue` and `field_value` are accepted as aliases of `expression`")
    }

    /// Create an error for an unknown strategy name.
    pub fn invalid_strategy(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(
            ErrorCode::InvalidStrategy,
            format!("Unknown match strategy '{}'", name),
        )
        .with_input(&name)
        .with_suggestion("Use one of: all, any, none")
    }

    /// Create a configuration parse error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(
            ErrorCode::InvalidConfiguration,
            format!("Invalid configuration: {}", message),
        )
        .with_suggestion("Run `logsift init --force` to regenerate a default configuration")
    }

    /// Create a configuration I/O error.
    pub fn configuration_io(path: impl Into<String>, message: impl Into<String>) -> Self {
        let path = path.into();
        let message = message.into();
        Self::new(
            ErrorCode::ConfigurationIo,
            format!("Cannot access configuration file {}: {}", path, message),
        )
        .with_input(&path)
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message.into())
    }

    // ============== Display Functions ==============

    /// Display the full error with all context and suggestions.
    pub fn display_full(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Error [{}]: {}\n", self.code.code(), self.message));

        if let Some(ref op) = self.context.operation {
            output.push_str(&format!("  → While: {}\n", op));
        }
        if let Some(ref input) = self.context.input {
            output.push_str(&format!("  → Input: {}\n", input));
        }

        if !self.context.suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for (i, suggestion) in self.context.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        if let Some(ref help) = self.context.help {
            output.push_str(&format!("\nHelp: {}\n", help));
        }

        output
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::serialization(format!("JSON error: {}", err)).with_source(err)
    }
}

impl From<toml::de::Error> for QueryError {
    fn from(err: toml::de::Error) -> Self {
        QueryError::invalid_configuration(err.message().to_string()).with_source(err)
    }
}

impl From<toml::ser::Error> for QueryError {
    fn from(err: toml::ser::Error) -> Self {
        QueryError::serialization(format!("TOML error: {}", err)).with_source(err)
    }
}
