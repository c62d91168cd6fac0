//! TOML run configuration.
//!
//! ```toml
//! [visibility]
//! threads = 8
//! chunk_size = 10
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::Path;

use anyhow::{Context, Result};
use radvis_visibility::BuildSettings;
use serde::Deserialize;

/// Contents of a `--config` file.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Matrix construction settings.
    pub visibility: BuildSettings,
}

impl Config {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("error opening config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse config text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
