//! Shared test utilities for the cluster-configs workspace.
//!
//! This crate provides standardised config-directory fixtures so each crate's
//! test suite does not hand-roll its own. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`config_dir`]: [`TestConfigDir`] builder for preset attribute files

pub mod config_dir;

pub use config_dir::TestConfigDir;
