//! Error types

use cloth_dom::DomError;
use cloth_html::HtmlError;
use std::path::PathBuf;

/// Result type for document host calls
pub type HostResult<T> = Result<T, HostError>;

/// Failure reported by a document host
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("Markup error: {0}")]
    Markup(#[from] HtmlError),

    #[error("Host error: {0}")]
    Other(String),
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
