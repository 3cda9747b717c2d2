//! Configuration resolution with tiered overrides
//!
//! The `ConfigResolver` merges three tiers for each of the master and worker
//! counts independently, later tiers overriding earlier ones, and validates
//! only the final merged values.

use crate::error::{ResolveError, ResolveResult};
use crate::model::{ClusterConfig, ConfigOverride, DEFAULT_CONFIG};
use crate::preset::{self, DEFAULT_PRESET, PresetFiles, PresetSummary};
use crate::registry::ConfigPathRegistry;
use crate::{Error, Result};
use cluster_fs::NormalizedPath;
use std::sync::Arc;

/// Resolves cluster configurations against the current config directory
///
/// Configuration is merged from these tiers:
/// 1. Built-in defaults, replaced by `default.mastercount` / `default.workercount`
///    when those files exist
/// 2. The named preset (`<name>.mastercount` / `<name>.workercount`)
/// 3. Non-zero counts supplied explicitly by the caller
///
/// The resolver holds no state of its own beyond the shared registry and
/// re-reads the filesystem on every call, so it can be shared freely between
/// threads.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    registry: Arc<ConfigPathRegistry>,
}

impl ConfigResolver {
    /// Create a resolver reading from whatever directory `registry` holds
    pub fn new(registry: Arc<ConfigPathRegistry>) -> Self {
        Self { registry }
    }

    /// Create a resolver with its own registry set to `dir`
    pub fn with_config_dir(dir: impl Into<NormalizedPath>) -> Self {
        Self::new(Arc::new(ConfigPathRegistry::with_path(dir)))
    }

    pub fn registry(&self) -> &Arc<ConfigPathRegistry> {
        &self.registry
    }

    /// The config directory the next resolution will read from
    pub fn config_dir(&self) -> NormalizedPath {
        self.registry.get()
    }

    /// Resolve the effective configuration for `config_override`.
    ///
    /// `None` behaves exactly like an override with no name and zero counts.
    /// On failure the returned [`ResolveError`] carries the values merged so
    /// far; they must not be used for provisioning.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cluster_config::{ConfigOverride, ConfigResolver};
    ///
    /// let resolver = ConfigResolver::with_config_dir("/etc/cluster-configs");
    /// let config = resolver.resolve(Some(&ConfigOverride::named("small")))?;
    /// println!("{} workers", config.worker_count);
    /// # Ok::<(), cluster_config::ResolveError>(())
    /// ```
    pub fn resolve(&self, config_override: Option<&ConfigOverride>) -> ResolveResult {
        // Read the path once so a concurrent `set` cannot split one resolution
        // across two directories.
        let dir = self.registry.get();
        let mut config = DEFAULT_CONFIG;

        let outcome =
            merge_tiers(&dir, config_override, &mut config).and_then(|()| validate(&config));
        match outcome {
            Ok(()) => Ok(config),
            Err(kind) => Err(ResolveError::new(config, kind)),
        }
    }

    /// Presets available in the current config directory, sorted by name
    pub fn list_presets(&self) -> Result<Vec<PresetSummary>> {
        preset::scan_presets(&self.registry.get())
    }

    /// Write attribute files for `name` into the current config directory.
    ///
    /// Only the supplied values are written; an absent value leaves any
    /// existing file for that attribute untouched.
    pub fn save_preset(
        &self,
        name: &str,
        master_count: Option<i64>,
        worker_count: Option<i64>,
    ) -> Result<()> {
        preset::write_preset(&self.registry.get(), name, master_count, worker_count)
    }
}

fn merge_tiers(
    dir: &NormalizedPath,
    config_override: Option<&ConfigOverride>,
    config: &mut ClusterConfig,
) -> Result<()> {
    // Tier 1 - built-in defaults, optionally replaced by the "default" preset
    let user_default = PresetFiles::load(dir, DEFAULT_PRESET)?;
    if user_default.is_empty() {
        tracing::debug!(%dir, "No user default config found (tier 1); using built-in defaults");
    } else {
        tracing::debug!(%dir, ?user_default, "Applying user default config (tier 1)");
        apply_preset(config, &user_default);
    }

    let Some(config_override) = config_override else {
        return Ok(());
    };

    // Tier 2 - named preset
    if let Some(name) = config_override.preset_name() {
        preset::validate_preset_name(name)?;
        let files = PresetFiles::load(dir, name)?;
        if files.is_empty() {
            return Err(Error::NamedConfigDoesNotExist {
                name: name.to_string(),
            });
        }
        tracing::debug!(%dir, preset = name, ?files, "Applying named config (tier 2)");
        apply_preset(config, &files);
        config.name = name.to_string();
    }

    // Tier 3 - explicit counts; zero means "not supplied"
    if config_override.master_count != 0 {
        tracing::debug!(master_count = config_override.master_count, "Explicit master count (tier 3)");
        config.master_count = config_override.master_count;
    }
    if config_override.worker_count != 0 {
        tracing::debug!(worker_count = config_override.worker_count, "Explicit worker count (tier 3)");
        config.worker_count = config_override.worker_count;
    }

    Ok(())
}

fn apply_preset(config: &mut ClusterConfig, files: &PresetFiles) {
    if let Some(master_count) = files.master_count {
        config.master_count = master_count;
    }
    if let Some(worker_count) = files.worker_count {
        config.worker_count = worker_count;
    }
}

/// Check the topology constraints on a fully merged configuration.
///
/// A cluster has exactly one master and at least one worker. The master
/// constraint is reported first when both are violated.
pub fn validate(config: &ClusterConfig) -> Result<()> {
    if config.master_count != 1 {
        return Err(Error::MasterCountMustBeOne);
    }
    if config.worker_count < 1 {
        return Err(Error::WorkerCountMustBeAtLeastOne);
    }
    Ok(())
}
