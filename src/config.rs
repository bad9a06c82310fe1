// Configuration management

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::AppConfig;

pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
        .join("newscheck");

    fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

    Ok(config_dir)
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}

pub fn get_log_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("newscheck.log"))
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&get_config_path()?)
}

/// Reads the config at `path`, writing the defaults there first if it is missing.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let default_config = AppConfig::default();
        save_config_to(path, &default_config)?;
        info!("Wrote default config to {}", path.display());
        return Ok(default_config);
    }

    let contents = fs::read_to_string(path).context("Failed to read config file")?;

    let config: AppConfig = toml::from_str(&contents).context("Failed to parse config file")?;

    Ok(config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(path, contents).context("Failed to write config file")?;

    Ok(())
}

/// Command-line values win over whatever the config file says.
pub fn apply_overrides(
    mut config: AppConfig,
    service_url: Option<String>,
    request_timeout: Option<u64>,
) -> AppConfig {
    if let Some(url) = service_url {
        config.service_url = url;
    }
    if request_timeout.is_some() {
        config.request_timeout = request_timeout;
    }
    if config.request_timeout == Some(0) {
        warn!("Ignoring request_timeout = 0; requests will wait indefinitely");
        config.request_timeout = None;
    }
    config
}
