//! Logging setup controlled by the `LOGSIFT_DEBUG` environment variable.
//!
//! # Environment Variables
//!
//! - `LOGSIFT_DEBUG=true` - Enable debug logging
//! - `LOGSIFT_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `LOGSIFT_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! Subscriber installation needs the `tracing-subscriber` feature. Without it,
//! events go to whatever subscriber the host application installed.
//!
//! ```rust,no_run
//! use logsift_query::logging;
//!
//! logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `LOGSIFT_DEBUG`.
///
/// Returns `true` if `LOGSIFT_DEBUG` is set to "true", "1", or "yes" (case-insensitive).
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("LOGSIFT_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level from `LOGSIFT_LOG_LEVEL`.
///
/// Defaults to "debug" if `LOGSIFT_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    let fallback = if is_debug_enabled() { "debug" } else { "warn" };
    match env::var("LOGSIFT_LOG_LEVEL") {
        Ok(level) => match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => fallback,
        },
        Err(_) => fallback,
    }
}

/// Get the configured log format from `LOGSIFT_LOG_FORMAT`.
pub fn get_log_format() -> &'static str {
    env::var("LOGSIFT_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize logging. Subsequent calls are no-ops.
///
/// Nothing is installed unless `LOGSIFT_DEBUG` or `LOGSIFT_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("LOGSIFT_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!(
                "logsift={},logsift_query={},logsift_cli={}",
                level, level, level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            // try_init: the host may already own the global subscriber
            let installed = match get_log_format() {
                "json" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .try_init(),
                "compact" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().compact().with_writer(std::io::stderr))
                    .try_init(),
                _ => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().pretty().with_writer(std::io::stderr))
                    .try_init(),
            };

            if installed.is_ok() {
                tracing::info!(
                    level = level,
                    format = get_log_format(),
                    "logsift logging initialized"
                );
            }
        }
    });
}
