//! Command implementations for cluster-cli

pub mod presets;
pub mod resolve;

pub use presets::{run_presets, run_set_preset};
pub use resolve::run_resolve;
