//! Shared holder for the directory searched for named presets

use cluster_fs::NormalizedPath;
use std::sync::RwLock;

/// Config directory used when none has been set
pub const DEFAULT_CONFIG_PATH: &str = "/etc/cluster-configs/";

/// The current config directory, shared between resolvers.
///
/// `set` replaces the value unconditionally and the last writer wins. The
/// lock only guarantees that readers see a whole path; it does not hold
/// resolutions back while the path changes. Whether the directory exists is
/// checked lazily when a resolution reads from it.
#[derive(Debug)]
pub struct ConfigPathRegistry {
    path: RwLock<NormalizedPath>,
}

impl Default for ConfigPathRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPathRegistry {
    /// Create a registry pointing at [`DEFAULT_CONFIG_PATH`]
    pub fn new() -> Self {
        Self::with_path(DEFAULT_CONFIG_PATH)
    }

    pub fn with_path(path: impl Into<NormalizedPath>) -> Self {
        Self {
            path: RwLock::new(path.into()),
        }
    }

    /// Current config directory
    pub fn get(&self) -> NormalizedPath {
        match self.path.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => {
                tracing::warn!("config path lock poisoned; using last written value");
                poisoned.into_inner().clone()
            }
        }
    }

    /// Replace the config directory
    pub fn set(&self, path: impl Into<NormalizedPath>) {
        let path = path.into();
        tracing::debug!(%path, "config path changed");
        match self.path.write() {
            Ok(mut guard) => *guard = path,
            Err(poisoned) => *poisoned.into_inner() = path,
        }
    }
}
