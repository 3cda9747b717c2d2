//! Layered cluster configuration resolution
//!
//! Resolves the master and worker counts a cluster should be provisioned
//! with, from three tiers:
//!
//! - **Defaults** - one master, one worker, unless `default.mastercount` /
//!   `default.workercount` exist in the config directory
//! - **Named presets** - `<name>.mastercount` / `<name>.workercount` files
//! - **Explicit overrides** - non-zero counts supplied by the caller
//!
//! The merged result must have exactly one master and at least one worker.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use cluster_config::{ConfigOverride, ConfigPathRegistry, ConfigResolver};
//!
//! let registry = Arc::new(ConfigPathRegistry::new());
//! registry.set("/srv/cluster-configs");
//!
//! let resolver = ConfigResolver::new(Arc::clone(&registry));
//! match resolver.resolve(Some(&ConfigOverride::named("small"))) {
//!     Ok(config) => println!("{} workers", config.worker_count),
//!     Err(e) => eprintln!("not provisioning: {e} (merged {:?})", e.partial()),
//! }
//! ```

pub mod error;
pub mod model;
pub mod preset;
pub mod registry;
pub mod resolver;

pub use error::{Error, ResolveError, ResolveResult, Result};
pub use model::{ClusterConfig, ConfigOverride, DEFAULT_CONFIG};
pub use preset::{Attribute, PresetFiles, PresetSummary};
pub use registry::{ConfigPathRegistry, DEFAULT_CONFIG_PATH};
pub use resolver::{ConfigResolver, validate};
