use std::env;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rollcall::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "rollcall_core=debug,rollcall=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cwd = env::current_dir()?;
    dispatch(cli.command, &cwd)
}

fn dispatch(command: Commands, cwd: &std::path::Path) -> Result<()> {
    match command {
        Commands::Extract(args) => rollcall::cli::extract::run(cwd, &args),
        Commands::Explain { candidates, config } => {
            rollcall::cli::explain::run(cwd, &candidates, config.as_deref())
        }
        Commands::Config { config } => rollcall::cli::config::run(cwd, config.as_deref()),
    }
}
