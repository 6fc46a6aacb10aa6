//! Application configuration.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default carrier-data service endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.fmobile.app/v1";

/// Settings read from the user configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the carrier-data service.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Path of the user configuration file.
pub fn config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("could not determine the user configuration directory")?;
    Ok(base.join("simscope").join("config.toml"))
}

/// Write a commented default configuration file if none exists yet.
pub fn ensure_default_config() -> Result<()> {
    let path = config_path()?;
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }

    let defaults = AppConfig::default();
    let contents = format!(
        "# simscope configuration\n\n\
         # Base URL of the carrier-data service.\n\
         api_base_url = \"{}\"\n\n\
         # Per-request timeout in seconds.\n\
         request_timeout_secs = {}\n",
        defaults.api_base_url, defaults.request_timeout_secs
    );
    fs::write(&path, contents)
        .with_context(|| format!("failed to write default config {}", path.display()))
}

impl AppConfig {
    /// Load configuration from the user config file, with `SIMSCOPE_*`
    /// environment overrides on top.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path()?)
    }

    /// Load configuration from an explicit file path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        let defaults = AppConfig::default();
        let settings = config::Config::builder()
            .set_default("api_base_url", defaults.api_base_url)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs)?
            .add_source(config::File::from(path.into()).required(false))
            .add_source(config::Environment::with_prefix("SIMSCOPE"))
            .build()
            .context("failed to assemble configuration")?;
        settings
            .try_deserialize()
            .context("failed to deserialize configuration")
    }
}
