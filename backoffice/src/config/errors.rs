use backoffice_layout::LayoutError;
use thiserror::Error;

/// Errors emitted while reading or validating the shell config.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Filesystem operation failed.
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("config JSON failed")]
    Json(#[from] serde_json::Error),
    /// Values parsed but do not describe a usable layout.
    #[error("config validation failed: {0}")]
    Layout(#[from] LayoutError),
}
