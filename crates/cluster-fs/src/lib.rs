//! Filesystem access for cluster configuration directories
//!
//! Provides normalized path handling, plain-text reads and locked atomic
//! writes for the single-value attribute files that make up a preset.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::{NormalizedPath, validate_path_identifier};
