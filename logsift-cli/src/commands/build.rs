//! `logsift build` command - Build a boolean query from filter expressions.

use std::path::Path;

use logsift_query::{CONFIG_FILE_NAME, FilterEntity, StatementConfig};
use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::cli::BuildArgs;
use crate::error::{CliError, CliResult};
use crate::output;

/// Run the build command
pub async fn run(args: BuildArgs) -> CliResult<()> {
    let config = load_config(args.config.as_deref())?;
    let kind = args.strategy.unwrap_or(config.strategy);

    let mut entities = match &args.entities {
        Some(path) => read_entities(path).await?,
        None => Vec::new(),
    };
    entities.extend(args.exprs.into_iter().map(FilterEntity::new));

    if entities.is_empty() {
        output::warn("No filter expressions given; the query matches every document");
    }

    debug!(strategy = %kind, entities = entities.len(), "Building query");
    let query = config.strategy_for(kind).build(&entities);

    let json = if args.compact {
        query.to_json()?
    } else {
        query.to_json_pretty()?
    };
    output::json(&json);

    Ok(())
}

/// Load the explicit config, else `./logsift.toml` when present, else defaults.
fn load_config(path: Option<&Path>) -> CliResult<StatementConfig> {
    if let Some(path) = path {
        return Ok(StatementConfig::load(path)?);
    }

    let default_path = std::env::current_dir()?.join(CONFIG_FILE_NAME);
    if default_path.is_file() {
        Ok(StatementConfig::load(&default_path)?)
    } else {
        Ok(StatementConfig::default())
    }
}

async fn read_entities(path: &Path) -> CliResult<Vec<FilterEntity>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            CliError::Input(format!("Cannot read entities from {}: {}", path.display(), e))
        })?
    };

    let entities = FilterEntity::parse_list(&content)
        .map_err(|e| e.with_context(format!("Reading entities from {}", path.display())))?;
    Ok(entities)
}
