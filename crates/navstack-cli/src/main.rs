//! navstack CLI
//!
//! Replays navigation scripts against a fresh controller and prints the stack
//! after every step.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use navstack_cli::{list_kinds, replay, Script};
use navstack_core::NavConfig;

#[derive(Parser)]
#[command(name = "navstack")]
#[command(about = "Navigation stack controller script runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Controller config file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a navigation script and print the stack after each step
    Replay {
        /// Script file (.toml or .json)
        script: PathBuf,
    },

    /// List the showcase destination kinds
    Kinds,
}

fn load_config(path: Option<&PathBuf>) -> Result<NavConfig> {
    let mut config = match path {
        Some(path) => NavConfig::load_from_file(path)
            .with_context(|| format!("Loading config {}", path.display()))?,
        None => NavConfig::default(),
    };
    config
        .merge_with_env()
        .context("Applying NAVSTACK_* environment overrides")?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Replay { script } => {
            let config = load_config(cli.config.as_ref())?;
            let script = Script::load(&script)?;
            replay(&script, config, &mut stdout)?;
        }

        Commands::Kinds => {
            list_kinds(&mut stdout)?;
        }
    }

    Ok(())
}
