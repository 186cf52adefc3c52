//! Session context shared by every view
//!
//! Composes preferences, saved videos and the credential into one cheaply
//! cloneable handle. Build it once at start and hand clones to consumers.

use super::credential::CredentialHolder;
use super::preferences::PreferencesStore;
use super::saved::{SavedVideos, SavedVideosStore};
use crate::types::{Preferences, SessionSnapshot, Tab, VideoSummary};
use chrono::Utc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    preferences: PreferencesStore,
    saved: SavedVideosStore,
    credential: CredentialHolder,
}

impl SessionContext {
    pub fn new(preferences: Preferences, credential: CredentialHolder) -> Self {
        Self {
            preferences: PreferencesStore::new(preferences),
            saved: SavedVideosStore::new(),
            credential,
        }
    }

    /// Rebuild a session from a persisted snapshot
    pub fn restore(snapshot: SessionSnapshot, credential: CredentialHolder) -> Self {
        let session = Self::new(snapshot.preferences, credential);
        for video in snapshot.saved_videos {
            session.add_saved_video(video);
        }
        session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            preferences: self.preferences(),
            saved_videos: self.saved_videos(),
            saved_at: Utc::now().timestamp(),
        }
    }

    // Preferences

    pub fn preferences(&self) -> Preferences {
        self.preferences.current()
    }

    pub fn dark_theme(&self) -> bool {
        self.preferences.with(|p| p.dark_theme)
    }

    pub fn selected_tab(&self) -> Tab {
        self.preferences.with(|p| p.selected_tab)
    }

    pub fn search_term(&self) -> String {
        self.preferences.with(|p| p.search_term.clone())
    }

    pub fn set_theme(&self, dark: bool) {
        self.preferences.set_theme(dark);
    }

    pub fn toggle_theme(&self) -> bool {
        self.preferences.toggle_theme()
    }

    pub fn set_tab(&self, tab: Tab) {
        self.preferences.set_tab(tab);
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.preferences.set_search_term(term);
    }

    pub fn subscribe_preferences(&self) -> watch::Receiver<Preferences> {
        self.preferences.subscribe()
    }

    // Saved videos

    pub fn add_saved_video(&self, summary: VideoSummary) -> bool {
        self.saved.add_saved_video(summary)
    }

    pub fn saved_videos(&self) -> Vec<VideoSummary> {
        self.saved.list()
    }

    pub fn saved(&self) -> &SavedVideosStore {
        &self.saved
    }

    pub fn subscribe_saved(&self) -> watch::Receiver<SavedVideos> {
        self.saved.subscribe()
    }

    // Credential

    pub fn credential(&self) -> &CredentialHolder {
        &self.credential
    }

    pub fn token(&self) -> Option<String> {
        self.credential.token()
    }
}
