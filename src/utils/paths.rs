//! Path utilities for nxt-watch
//!
//! Respects XDG Base Directory Specification

use crate::error::Result;
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;

const APP_NAME: &str = "nxt-watch";

/// Pick the base directory: XDG variable, then platform default, then `$HOME/<fallback>`
fn resolve_app_dir(
    xdg: Option<String>,
    platform: Option<PathBuf>,
    home: Option<String>,
    home_fallback: &str,
) -> PathBuf {
    let base = xdg
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or(platform)
        .unwrap_or_else(|| PathBuf::from(home.unwrap_or_default()).join(home_fallback));

    base.join(APP_NAME)
}

/// Config directory, ~/.config/nxt-watch by default
pub fn config_dir() -> PathBuf {
    resolve_app_dir(
        env::var("XDG_CONFIG_HOME").ok(),
        dirs::config_dir(),
        env::var("HOME").ok(),
        ".config",
    )
}

/// Cache directory, ~/.cache/nxt-watch by default
pub fn cache_dir() -> PathBuf {
    resolve_app_dir(
        env::var("XDG_CACHE_HOME").ok(),
        dirs::cache_dir(),
        env::var("HOME").ok(),
        ".cache",
    )
}

/// Preferences and saved videos between runs
pub fn session_path() -> PathBuf {
    cache_dir().join("session.json")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Ensure a directory exists
pub async fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).await?;
    Ok(())
}

/// Ensure all required app directories exist
pub async fn ensure_app_dirs() -> Result<()> {
    ensure_dir(&config_dir()).await?;
    ensure_dir(&cache_dir()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xdg_variable_wins() {
        let dir = resolve_app_dir(
            Some("/xdg/config".into()),
            Some(PathBuf::from("/platform")),
            Some("/home/me".into()),
            ".config",
        );
        assert_eq!(dir, PathBuf::from("/xdg/config/nxt-watch"));
    }

    #[test]
    fn test_empty_xdg_falls_through() {
        let dir = resolve_app_dir(
            Some(String::new()),
            Some(PathBuf::from("/platform")),
            None,
            ".cache",
        );
        assert_eq!(dir, PathBuf::from("/platform/nxt-watch"));

        let dir = resolve_app_dir(None, None, Some("/home/me".into()), ".cache");
        assert_eq!(dir, PathBuf::from("/home/me/.cache/nxt-watch"));
    }

    #[test]
    fn test_files_live_under_app_dirs() {
        assert!(session_path().ends_with("nxt-watch/session.json"));
        assert!(config_path().ends_with("nxt-watch/config.json"));
    }
}
