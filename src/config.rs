// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::DEFAULT_CACHE_PATH;
use crate::feed::source::DEFAULT_FEED_URL;

pub const ENV_CONFIG_PATH: &str = "DASHBOARD_CONFIG_PATH";

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}
fn default_cache_path() -> PathBuf {
    PathBuf::from(DEFAULT_CACHE_PATH)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            cache_path: default_cache_path(),
        }
    }
}

impl DashboardConfig {
    /// Load from an explicit path. TOML or JSON, picked by extension.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading dashboard config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let cfg: Self = match ext.as_str() {
            "json" => serde_json::from_str(&content).context("parsing dashboard config json")?,
            _ => toml::from_str(&content).context("parsing dashboard config toml")?,
        };
        cfg.validated()
    }

    /// Load using env var + fallbacks:
    /// 1) $DASHBOARD_CONFIG_PATH
    /// 2) config/dashboard.toml
    /// 3) config/dashboard.json
    /// 4) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            } else {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
            }
        }
        for candidate in ["config/dashboard.toml", "config/dashboard.json"] {
            let p = PathBuf::from(candidate);
            if p.exists() {
                return Self::load_from(&p);
            }
        }
        Ok(Self::default())
    }

    fn validated(mut self) -> Result<Self> {
        self.feed_url = self.feed_url.trim().to_string();
        if self.feed_url.is_empty() {
            return Err(anyhow!("feed_url must not be empty"));
        }
        if self.cache_path.as_os_str().is_empty() {
            self.cache_path = default_cache_path();
        }
        Ok(self)
    }
}
