//! logsift CLI - command-line interface for logsift.
//!
//! Builds Elasticsearch boolean queries from filter expressions and manages
//! the `logsift.toml` configuration.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
