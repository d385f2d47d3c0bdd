use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod state;

use crate::cli::{Cli, Command};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries records
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Command::Version = cli.command {
        commands::version::handle_version();
        return Ok(());
    }

    let state = AppState::new()?;
    commands::run(&state, cli.command).await
}
