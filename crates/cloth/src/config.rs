//! Façade configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! fallback_root = "body"       # or "document-element"
//! missing_element = "debug"    # "ignore" | "debug" | "warn"
//! ```

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Configuration for a [`Cloth`](crate::Cloth) façade
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClothConfig {
    /// Container that receives appends whose parent id does not resolve
    pub fallback_root: FallbackRoot,
    /// How a lookup that finds no element is logged
    pub missing_element: MissingElementLog,
}

/// Fallback insertion target for `append`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackRoot {
    /// The `<body>` element
    #[default]
    Body,
    /// The `<html>` element
    DocumentElement,
}

impl fmt::Display for FallbackRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body => write!(f, "<body>"),
            Self::DocumentElement => write!(f, "<html>"),
        }
    }
}

/// Log level for element ids that resolve to nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingElementLog {
    Ignore,
    #[default]
    Debug,
    Warn,
}

impl ClothConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&source)
    }
}
