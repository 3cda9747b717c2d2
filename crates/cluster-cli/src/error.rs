//! Error types for cluster-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from cluster-config
    #[error(transparent)]
    Config(#[from] cluster_config::Error),

    /// Failed resolution from cluster-config
    #[error(transparent)]
    Resolve(#[from] cluster_config::ResolveError),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Logging setup error
    #[error("Failed to initialise logging: {message}")]
    Logging { message: String },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
