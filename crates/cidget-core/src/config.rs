use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::gateway;
use crate::naming;

/// Global configuration loaded from `~/.config/cidget/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CidgetConfig {
    /// Base URL of the content gateway, e.g. `http://127.0.0.1:8080`.
    pub gateway_base: String,
    /// Directory fetched files are written to (absent = working directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Output filename template; `{cid}` is replaced with the identifier.
    pub output_template: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Optional receive-rate cap in bytes per second (None = no cap).
    #[serde(default)]
    pub max_bytes_per_sec: Option<u64>,
    /// Optional receive buffer size in bytes (None = library default).
    #[serde(default)]
    pub buffer_bytes: Option<usize>,
}

impl Default for CidgetConfig {
    fn default() -> Self {
        Self {
            gateway_base: gateway::DEFAULT_GATEWAY.to_string(),
            output_dir: None,
            output_template: naming::DEFAULT_TEMPLATE.to_string(),
            connect_timeout_secs: 30,
            request_timeout_secs: 3600,
            max_bytes_per_sec: None,
            buffer_bytes: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cidget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CidgetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CidgetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CidgetConfig = toml::from_str(&data)?;
    Ok(cfg)
}
