//! Theme, tab and search term store

use crate::types::{Preferences, Tab};
use std::sync::Arc;
use tokio::sync::watch;

/// Preferences shared by every view, broadcast on every change
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    sender: Arc<watch::Sender<Preferences>>,
}

impl PreferencesStore {
    pub fn new(initial: Preferences) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Snapshot of the current preferences
    pub fn current(&self) -> Preferences {
        self.sender.borrow().clone()
    }

    /// Read without cloning
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Preferences) -> R,
    {
        f(&self.sender.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.sender.subscribe()
    }

    pub fn set_theme(&self, dark: bool) {
        tracing::debug!(dark, "theme changed");
        self.sender.send_modify(|prefs| prefs.dark_theme = dark);
    }

    pub fn toggle_theme(&self) -> bool {
        let mut dark = false;
        self.sender.send_modify(|prefs| {
            prefs.dark_theme = !prefs.dark_theme;
            dark = prefs.dark_theme;
        });
        tracing::debug!(dark, "theme toggled");
        dark
    }

    pub fn set_tab(&self, tab: Tab) {
        tracing::debug!(%tab, "tab changed");
        self.sender.send_modify(|prefs| prefs.selected_tab = tab);
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        self.sender.send_modify(|prefs| prefs.search_term = term);
    }
}

impl Default for PreferencesStore {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}
