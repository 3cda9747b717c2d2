//! Error types for cluster-config

use crate::model::ClusterConfig;
use cluster_fs::NormalizedPath;

/// Result type for cluster-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or resolving cluster configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A preset was requested by name but none of its attribute files exist
    #[error("Named config '{name}' does not exist")]
    NamedConfigDoesNotExist { name: String },

    /// An attribute file exists but could not be read or parsed
    #[error("Error while processing {path}: {detail}")]
    ErrorWhileProcessing { path: NormalizedPath, detail: String },

    #[error("Cluster configuration must have a masterCount of 1")]
    MasterCountMustBeOne,

    #[error("Cluster configuration may not have a workerCount less than 1")]
    WorkerCountMustBeAtLeastOne,

    /// Preset name cannot be used as a file-name component
    #[error("Invalid preset name '{name}': {reason}")]
    InvalidPresetName { name: String, reason: String },

    /// Loosely-typed override input could not be interpreted
    #[error("Invalid cluster config override: {message}")]
    InvalidOverride { message: String },

    /// Filesystem error from cluster-fs
    #[error(transparent)]
    Fs(#[from] cluster_fs::Error),
}

/// A failed resolution together with the values merged so far.
///
/// The partial config is for diagnostics only: nothing may be provisioned
/// from it.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct ResolveError {
    partial: ClusterConfig,
    #[source]
    kind: Error,
}

impl ResolveError {
    pub(crate) fn new(partial: ClusterConfig, kind: Error) -> Self {
        Self { partial, kind }
    }

    /// Values the resolver had merged when it failed
    pub fn partial(&self) -> &ClusterConfig {
        &self.partial
    }

    /// The reason resolution failed
    pub fn kind(&self) -> &Error {
        &self.kind
    }

    pub fn into_kind(self) -> Error {
        self.kind
    }

    pub fn into_parts(self) -> (ClusterConfig, Error) {
        (self.partial, self.kind)
    }
}

/// Result of [`ConfigResolver::resolve`](crate::ConfigResolver::resolve)
pub type ResolveResult = std::result::Result<ClusterConfig, ResolveError>;
