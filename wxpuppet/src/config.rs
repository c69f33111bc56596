use std::path::PathBuf;
use std::time::Duration;

use log::warn;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::Result;

/// Process-wide configuration, loaded once. A missing or unreadable config
/// file falls back to the defaults.
pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::load().unwrap_or_else(|e| {
        warn!("failed to load config, using defaults: {e}");
        Config::default()
    })
});

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// User agent sent with avatar requests. The web backend rejects
    /// clients it does not recognize.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) \
                         Gecko/20100101 Firefox/113.0"
                .to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
            }
            _ => Ok(Self::default()),
        }
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wxpuppet").join("config.toml"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
