use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use codebusters_app::cli::Cli;
use codebusters_app::game_loop;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout belongs to the referee
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let config = cli.agent_config()?;
    tracing::info!(config = ?config, "starting agent");

    let points = game_loop::run(io::stdin().lock(), io::stdout().lock(), config)?;
    tracing::info!(points, "match over");
    Ok(())
}
