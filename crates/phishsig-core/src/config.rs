use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::report::RiskThresholds;

/// Global configuration loaded from `~/.config/phishsig/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhishsigConfig {
    /// Number of attribution sentences in a verdict.
    pub explain_top_n: usize,
    /// Number of raw feature signals listed with a verdict.
    pub signal_top_n: usize,
    /// Optional upper bound on url length in characters (None = no limit).
    #[serde(default)]
    pub max_url_len: Option<usize>,
    /// Optional default model file for `predict` (JSON linear model).
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Optional risk cut-offs; if missing, built-in defaults are used.
    #[serde(default)]
    pub risk: Option<RiskThresholds>,
}

impl Default for PhishsigConfig {
    fn default() -> Self {
        Self {
            explain_top_n: 3,
            signal_top_n: 10,
            max_url_len: None,
            model_path: None,
            risk: None,
        }
    }
}

impl PhishsigConfig {
    pub fn risk_thresholds(&self) -> RiskThresholds {
        self.risk.unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishsig")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishsigConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PhishsigConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PhishsigConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
