use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::suffix::{ParseOptions, UnknownKeyPolicy};

/// How the CLI renders parsed attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/soattrs/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoattrsConfig {
    /// "ignore" (default) drops attribute keys nothing recognizes; "reject" fails the parse.
    #[serde(default)]
    pub unknown_keys: UnknownKeyPolicy,
    /// Default output format for the CLI: "text" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
}

impl SoattrsConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            unknown_keys: self.unknown_keys,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("soattrs")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SoattrsConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] with an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<SoattrsConfig> {
    if !path.exists() {
        let default_cfg = SoattrsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

/// Load configuration from an existing file.
pub fn load_from(path: &Path) -> Result<SoattrsConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SoattrsConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
