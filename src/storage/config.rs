//! Configuration management

use crate::error::{NxtWatchError, Result};
use crate::types::Config;
use crate::utils::paths::{config_dir, config_path, ensure_dir};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::process::Command;

/// Load configuration from file, merging with defaults
pub async fn load_config() -> Result<Config> {
    load_config_from(&config_path()).await
}

/// Load configuration from a specific file
pub async fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).await?;
    // Missing fields fall back to defaults
    let config: Config = serde_json::from_str(&content)
        .map_err(|e| NxtWatchError::InvalidConfig(format!("{}: {}", path.display(), e)))?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    let url = &config.api_base_url;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(NxtWatchError::InvalidConfig(format!(
            "api_base_url must be an http(s) URL, got {:?}",
            config.api_base_url
        )));
    }
    Ok(())
}

/// Request timeout, if one is configured
pub fn request_timeout(config: &Config) -> Option<Duration> {
    (config.request_timeout_secs > 0).then(|| Duration::from_secs(config.request_timeout_secs))
}

/// Save configuration to file
pub async fn save_config(config: &Config) -> Result<()> {
    ensure_dir(&config_dir()).await?;
    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_path(), content).await?;
    Ok(())
}

/// Open config file in editor
pub async fn edit_config(editor: &str) -> Result<()> {
    let path = config_path();

    // Ensure config file exists
    if !path.exists() {
        save_config(&Config::default()).await?;
    }

    Command::new(editor)
        .arg(&path)
        .status()
        .await?;

    Ok(())
}
