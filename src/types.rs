//! Type definitions for nxt-watch
//!
//! Source of truth for all data structures.

use crate::error::NxtWatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================
// Video Types
// ============================================

/// Minimal video record used for lists and saved videos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub channel_name: String,
    pub view_count: u64,
    /// Bare duration, e.g. "2 years". The view appends "ago".
    pub published_ago: String,
}

/// Full record for a single video's detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDetail {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub channel_name: String,
    pub view_count: u64,
    pub published_ago: String,
    pub description: String,
    pub video_url: String,
    pub channel_profile_image_url: String,
    pub subscriber_count: u64,
}

impl VideoDetail {
    /// Project the detail down to the record kept in the saved list
    pub fn summary(&self) -> VideoSummary {
        VideoSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            channel_name: self.channel_name.clone(),
            view_count: self.view_count,
            published_ago: self.published_ago.clone(),
        }
    }
}

// ============================================
// Preference Types
// ============================================

/// Navigation tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tab {
    #[default]
    Home,
    Trending,
    Gaming,
    Playlist,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Trending, Tab::Gaming, Tab::Playlist];

    /// Upper-case name used by config files and the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Home => "HOME",
            Tab::Trending => "TRENDING",
            Tab::Gaming => "GAMING",
            Tab::Playlist => "PLAYLIST",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Trending => "Trending",
            Tab::Gaming => "Gaming",
            Tab::Playlist => "Saved Videos",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = NxtWatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NxtWatchError::UnknownTab(s.to_string()))
    }
}

/// Theme, navigation and search state shared by every view
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_theme: bool,
    pub selected_tab: Tab,
    pub search_term: String,
}

// ============================================
// Config Types
// ============================================

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the video catalog API
    pub api_base_url: String,
    /// Bearer token, if signed in
    pub token: Option<String>,
    /// Start in dark theme
    pub dark_theme: bool,
    /// Tab highlighted on start
    pub default_tab: Tab,
    /// Request timeout in seconds (0 = rely on the transport)
    pub request_timeout_secs: u64,
    /// Keep preferences and saved videos between runs
    pub persist_session: bool,
    /// Editor command (default: "nvim")
    pub editor: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://apis.ccbp.in".into(),
            token: None,
            dark_theme: false,
            default_tab: Tab::default(),
            request_timeout_secs: 30,
            persist_session: true,
            editor: "nvim".into(),
        }
    }
}

impl Config {
    pub fn initial_preferences(&self) -> Preferences {
        Preferences {
            dark_theme: self.dark_theme,
            selected_tab: self.default_tab,
            search_term: String::new(),
        }
    }
}

// ============================================
// Persistence Types
// ============================================

/// Session state written to disk between runs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub preferences: Preferences,
    pub saved_videos: Vec<VideoSummary>,
    /// Unix timestamp of the last save
    pub saved_at: i64,
}

// ============================================
// Selector Types
// ============================================

/// Item displayed in selector menu
#[derive(Debug, Clone)]
pub struct MenuItem<T> {
    /// Display text
    pub label: String,
    /// Underlying value
    pub value: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_parse() {
        assert_eq!("TRENDING".parse::<Tab>().unwrap(), Tab::Trending);
        assert_eq!("playlist".parse::<Tab>().unwrap(), Tab::Playlist);
        assert!(matches!(
            "MUSIC".parse::<Tab>(),
            Err(NxtWatchError::UnknownTab(_))
        ));
    }

    #[test]
    fn test_tab_serde_uses_upper_case_names() {
        let json = serde_json::to_string(&Tab::Gaming).unwrap();
        assert_eq!(json, "\"GAMING\"");
        assert_eq!(Tab::Playlist.label(), "Saved Videos");
    }

    #[test]
    fn test_config_fills_missing_fields() {
        let cfg: Config = serde_json::from_str(r#"{"dark_theme": true}"#).unwrap();
        assert!(cfg.dark_theme);
        assert_eq!(cfg.api_base_url, "https://apis.ccbp.in");
        assert_eq!(cfg.default_tab, Tab::Home);
    }
}
