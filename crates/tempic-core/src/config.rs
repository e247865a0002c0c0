use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::http::HttpOptions;

/// Global configuration loaded from `~/.config/tempic/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempicConfig {
    /// Instance to use when neither `--host` nor `TEMPIC_HOST` is given.
    #[serde(default)]
    pub host: Option<String>,
    /// Seconds to wait for the TCP/TLS connection.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Overall request limit in seconds (None = wait indefinitely).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_connect_timeout_secs() -> u64 {
    15
}

impl Default for TempicConfig {
    fn default() -> Self {
        Self {
            host: None,
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: None,
        }
    }
}

impl TempicConfig {
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tempic")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TempicConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<TempicConfig> {
    if !path.exists() {
        let default_cfg = TempicConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: TempicConfig = toml::from_str(&data)?;
    Ok(cfg)
}
