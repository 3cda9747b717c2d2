//! Resolve command

use colored::Colorize;
use cluster_config::{ClusterConfig, ConfigOverride, ConfigResolver};

use crate::error::Result;

/// Resolve and print the effective configuration.
///
/// On failure the partially merged values are logged at debug level and the
/// error is returned; nothing is printed to stdout.
pub fn run_resolve(
    resolver: &ConfigResolver,
    name: Option<String>,
    masters: i64,
    workers: i64,
    json: bool,
) -> Result<()> {
    let config_override = ConfigOverride {
        name,
        master_count: masters,
        worker_count: workers,
    };

    let config = resolver.resolve(Some(&config_override)).inspect_err(|e| {
        tracing::debug!(
            config_dir = %resolver.config_dir(),
            partial = ?e.partial(),
            "resolution failed"
        );
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print_config(&config);
    }
    Ok(())
}

fn print_config(config: &ClusterConfig) {
    println!("{}", "Cluster Configuration".bold());
    println!();
    let preset = if config.name.is_empty() {
        "(default)".dimmed().to_string()
    } else {
        config.name.clone()
    };
    println!("  {:<10} {}", "Preset:".dimmed(), preset);
    println!("  {:<10} {}", "Masters:".dimmed(), config.master_count);
    println!("  {:<10} {}", "Workers:".dimmed(), config.worker_count);
}
