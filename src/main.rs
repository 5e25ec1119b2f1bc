//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_games::{
    cli::{Commands, NbaGames},
    commands::{
        common::CommandContext,
        list::{handle_list, ListParams},
        load::handle_load,
        resolve_config,
        serve::handle_serve,
        synthesize::handle_synthesize,
    },
};
use tracing_subscriber::{fmt, EnvFilter};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = NbaGames::parse();

    let default_level = if app.verbose { "debug" } else { "info" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(app.paths).context("Failed to resolve configuration")?;

    match app.command {
        Commands::Serve { host, port, reload } => {
            let mut config = config;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            let ctx = CommandContext::new(config).context("Failed to open record database")?;
            handle_serve(ctx, reload).await?;
        }

        Commands::Load { kind, json } => {
            let ctx = CommandContext::new(config).context("Failed to open record database")?;
            handle_load(&ctx, kind, json).with_context(|| format!("Failed to load {} records", kind))?;
        }

        Commands::List {
            kind,
            json,
            season,
            limit,
        } => {
            let ctx = CommandContext::new(config).context("Failed to open record database")?;
            handle_list(
                &ctx,
                kind,
                ListParams {
                    as_json: json,
                    season,
                    limit,
                },
            )?;
        }

        Commands::Synthesize { force } => {
            handle_synthesize(&config, force)?;
        }
    }

    Ok(())
}
