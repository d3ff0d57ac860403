//! CLI error types and result alias.

use logsift_query::QueryError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(logsift::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(logsift::config))]
    Config(String),

    /// Entity input error
    #[error("Input error: {0}")]
    #[diagnostic(code(logsift::input))]
    Input(String),

    /// Error raised by the query library
    #[error("{}", .0.display_full().trim_end())]
    #[diagnostic(code(logsift::query))]
    Query(#[from] QueryError),
}
