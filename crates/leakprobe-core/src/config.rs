use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Built-in default for simultaneous in-flight probes.
pub const DEFAULT_CONCURRENCY: usize = 5;
/// Built-in default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Optional defaults loaded from `~/.config/leakprobe/config.toml`.
/// Command-line flags always take precedence over these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeakprobeConfig {
    /// Maximum simultaneous in-flight probes.
    pub concurrency: usize,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LeakprobeConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("leakprobe")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LeakprobeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LeakprobeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LeakprobeConfig = toml::from_str(&data)?;
    Ok(cfg)
}
