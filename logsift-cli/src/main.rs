//! logsift CLI - compile log filters into Elasticsearch queries.

use clap::Parser;

use logsift_cli::cli::{Cli, Command};
use logsift_cli::commands;
use logsift_cli::error::CliResult;
use logsift_cli::output;

#[tokio::main]
async fn main() {
    logsift_query::logging::init();

    if let Err(e) = run().await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => commands::build::run(args).await,
        Command::Init(args) => commands::init::run(args).await,
        Command::Version => commands::version::run().await,
    }
}
