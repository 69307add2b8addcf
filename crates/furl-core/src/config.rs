use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::context::DEFAULT_ACTION;

/// Global configuration loaded from `~/.config/furl/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurlConfig {
    /// Leave query strings out of the slugs (default). When false, the query
    /// pairs of the first segment replace the path slugs.
    #[serde(default = "default_ignore_get")]
    pub ignore_get: bool,
    /// Action substituted when the requested one is not whitelisted.
    #[serde(default = "default_action")]
    pub default_action: String,
    /// Whitelisted actions.
    #[serde(default)]
    pub filters: Vec<String>,
    /// Explicit base URL; ignored for requests it doesn't prefix.
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_ignore_get() -> bool {
    true
}

fn default_action() -> String {
    DEFAULT_ACTION.to_string()
}

impl Default for FurlConfig {
    fn default() -> Self {
        Self {
            ignore_get: default_ignore_get(),
            default_action: default_action(),
            filters: Vec::new(),
            base_url: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("furl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FurlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FurlConfig =
        toml::from_str(&data).with_context(|| format!("invalid config at {}", path.display()))?;
    Ok(cfg)
}
