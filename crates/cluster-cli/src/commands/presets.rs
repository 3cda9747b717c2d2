//! Preset listing and writing commands

use colored::Colorize;
use cluster_config::ConfigResolver;

use crate::error::{CliError, Result};

/// List presets found in the config directory
pub fn run_presets(resolver: &ConfigResolver, json: bool) -> Result<()> {
    let presets = resolver.list_presets()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&presets)?);
        return Ok(());
    }

    let dir = resolver.config_dir();
    if presets.is_empty() {
        println!("No presets in {}", dir.to_string().cyan());
        return Ok(());
    }

    println!("{} {}", "Presets in".bold(), dir.to_string().cyan());
    println!();
    for preset in &presets {
        println!(
            "  {} {:<16} masters: {:<8} workers: {}",
            "+".green(),
            preset.name,
            describe(preset.master_count),
            describe(preset.worker_count)
        );
    }
    Ok(())
}

fn describe(value: Option<i64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "inherit".to_string(),
    }
}

/// Write the supplied counts for `name` into the config directory
pub fn run_set_preset(
    resolver: &ConfigResolver,
    name: &str,
    masters: Option<i64>,
    workers: Option<i64>,
) -> Result<()> {
    if masters.is_none() && workers.is_none() {
        return Err(CliError::user(
            "Nothing to write: pass --masters and/or --workers",
        ));
    }

    resolver.save_preset(name, masters, workers)?;

    println!(
        "{} Saved preset {} in {}",
        "OK".green().bold(),
        name.bold(),
        resolver.config_dir()
    );
    Ok(())
}
