use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ModelselecConfig {
    /// Transform settings.
    #[serde(default)]
    pub transform: TransformToml,

    /// Input schema settings.
    #[serde(default)]
    pub schema: SchemaToml,
}

impl ModelselecConfig {
    /// Reads a config file, or returns the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformToml {
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_lag")]
    pub lag: usize,
    #[serde(default = "default_log_domain")]
    pub log_domain: String,
    #[serde(default = "default_on_empty")]
    pub on_empty: String,
}

impl Default for TransformToml {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            lag: default_lag(),
            log_domain: default_log_domain(),
            on_empty: default_on_empty(),
        }
    }
}

fn default_kind() -> String {
    "diff".to_string()
}
fn default_lag() -> usize {
    1
}
fn default_log_domain() -> String {
    "propagate".to_string()
}
fn default_on_empty() -> String {
    "error".to_string()
}

/// Which input columns are numeric. `None` means all of them.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SchemaToml {
    #[serde(default)]
    pub numeric: Option<Vec<String>>,
}
