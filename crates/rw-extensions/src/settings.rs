//! Processor settings loaded from TOML.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Error loading processor settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Settings file could not be read.
    #[error("failed to read settings")]
    Io(#[from] std::io::Error),

    /// Settings are not valid TOML or have the wrong shape.
    #[error("invalid settings")]
    Toml(#[from] toml::de::Error),
}

/// Document processor settings.
///
/// ```toml
/// base_dir = "docs"
/// safe = true
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProcessorSettings {
    /// Directory asset targets are resolved against (default: `.`).
    pub base_dir: Option<PathBuf>,
    /// Confine asset paths to `base_dir`.
    pub safe: bool,
}

impl ProcessorSettings {
    /// Parse settings from a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
