//! Cluster configuration CLI
//!
//! Resolves the master and worker counts a cluster would be provisioned
//! with, and manages the preset files they are resolved from.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use cluster_config::ConfigResolver;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    let resolver = ConfigResolver::with_config_dir(cli.config_dir.as_str());
    tracing::debug!(config_dir = %resolver.config_dir(), "using config directory");

    match cli.command {
        Some(cmd) => execute_command(&resolver, cmd),
        None => {
            // No command provided - show help hint
            println!("{} Cluster configuration tool", "clusterconf".green().bold());
            println!();
            println!("Run {} for available commands.", "clusterconf --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(resolver: &ConfigResolver, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve {
            name,
            masters,
            workers,
            json,
        } => commands::run_resolve(resolver, name, masters, workers, json),
        Commands::Presets { json } => commands::run_presets(resolver, json),
        Commands::SetPreset {
            name,
            masters,
            workers,
        } => commands::run_set_preset(resolver, &name, masters, workers),
    }
}
