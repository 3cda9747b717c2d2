//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use cluster_config::DEFAULT_CONFIG_PATH;

/// Cluster configuration tool - resolve and manage cluster config presets
#[derive(Parser, Debug)]
#[command(name = "clusterconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding preset attribute files
    #[arg(
        long,
        global = true,
        env = "CLUSTER_CONFIG_DIR",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config_dir: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the effective cluster configuration
    ///
    /// Starts from the defaults (or the `default` preset), applies the named
    /// preset, then any explicit counts. Zero means "not supplied".
    ///
    /// Examples:
    ///   clusterconf resolve                      # Defaults only
    ///   clusterconf resolve --name small         # Named preset
    ///   clusterconf resolve -n small --workers 5 # Preset with explicit workers
    Resolve {
        /// Named preset to start from
        #[arg(short, long)]
        name: Option<String>,

        /// Explicit master count (0 = inherit)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        masters: i64,

        /// Explicit worker count (0 = inherit)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        workers: i64,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List presets in the config directory
    Presets {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Write attribute files for a preset
    ///
    /// Values are not validated until the preset is resolved.
    ///
    /// Examples:
    ///   clusterconf set-preset small --masters 1 --workers 3
    ///   clusterconf set-preset default --workers 2
    SetPreset {
        /// Name of the preset
        name: String,

        /// Master count to store
        #[arg(long, allow_negative_numbers = true)]
        masters: Option<i64>,

        /// Worker count to store
        #[arg(long, allow_negative_numbers = true)]
        workers: Option<i64>,
    },
}
