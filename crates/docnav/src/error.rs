//! CLI error types.

use docnav_config::ConfigError;
use docnav_pages::PagesError;
use docnav_tree::ConfigurationError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Pages(#[from] PagesError),

    #[error("{0}")]
    Navigation(#[from] ConfigurationError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
