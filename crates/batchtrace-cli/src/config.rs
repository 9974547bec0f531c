use batchtrace_types::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::types::{ColorChoice, LogLevel, OutputFormat};

/// Resolve the config file path based on priority:
/// 1. Explicit path (--config flag)
/// 2. BATCHTRACE_CONFIG environment variable
/// 3. User config directory (`<config_dir>/batchtrace/config.toml`)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Some(env_path) = std::env::var_os("BATCHTRACE_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|dir| dir.join("batchtrace").join("config.toml"))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub color: ColorChoice,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TreeConfig {
    /// Validate every tree before rendering
    #[serde(default)]
    pub check: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|err| Error::Config(format!("{}: {}", path.display(), err)))
    }
}
