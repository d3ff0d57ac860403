//! `logsift version` command - Display version information.

use logsift_query::StrategyKind;

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub async fn run() -> CliResult<()> {
    output::logo();
    output::newline();

    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    let strategies: Vec<&str> = StrategyKind::VARIANTS.iter().map(|k| k.name()).collect();
    kv("Strategies", &strategies.join(", "));

    output::newline();

    output::section("Components");
    kv("logsift-query", env!("CARGO_PKG_VERSION"));
    kv("logsift-cli", env!("CARGO_PKG_VERSION"));

    output::newline();
    output::dim("https://github.com/pegasusheavy/logsift");

    Ok(())
}
