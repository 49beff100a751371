mod cli;
mod commands;
mod prompt;

use clap::Parser;
use cli::{Cli, Commands};
use minirag_core::Settings;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = || -> anyhow::Result<Settings> {
        commands::resolve_settings(cli.config.as_deref(), cli.chunk_size, cli.overlap)
    };

    match &cli.command {
        Commands::Index { source } => commands::index::run(source, &settings()?),
        Commands::Chunk { file } => commands::chunk::run(file, &settings()?),
        Commands::Search {
            source,
            query,
            top_k,
            json,
        } => commands::search::run(source, query, *top_k, *json, &settings()?),
        Commands::Prompt {
            source,
            question,
            top_k,
            system,
            compact,
        } => commands::prompt::run(source, question, *top_k, system, *compact, &settings()?),
        Commands::Version => commands::version::run(),
    }
}
