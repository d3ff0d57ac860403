//! `logsift init` command - Write a default configuration file.

use logsift_query::{CONFIG_FILE_NAME, StatementConfig};

use crate::cli::InitArgs;
use crate::error::{CliError, CliResult};
use crate::output;

/// Run the init command
pub async fn run(args: InitArgs) -> CliResult<()> {
    if !args.path.is_dir() {
        return Err(CliError::Config(format!(
            "Directory not found: {}",
            args.path.display()
        )));
    }

    let config_path = args.path.join(CONFIG_FILE_NAME);
    if config_path.exists() && !args.force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }
    if config_path.exists() {
        output::warn(&format!("Overwriting {}", config_path.display()));
    }

    let config = StatementConfig {
        strategy: args.strategy,
        ..StatementConfig::default()
    };
    config.save(&config_path)?;

    output::success(&format!("Created {}", config_path.display()));
    Ok(())
}
