//! Session snapshot persistence
//!
//! Preferences and saved videos live only in memory; this writes them out on
//! exit and reads them back on start when the user opts in.

use crate::error::Result;
use crate::session::{CredentialHolder, SessionContext};
use crate::types::{Preferences, SessionSnapshot};
use crate::utils::paths::ensure_dir;
use std::path::PathBuf;
use tokio::fs;

/// Session snapshot file
#[derive(Debug)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the last snapshot; `None` when the file is missing or corrupt
    pub async fn load(&self) -> Result<Option<SessionSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).await?;
        match serde_json::from_str(&content) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ignoring corrupt session file"
                );
                Ok(None)
            }
        }
    }

    /// Restore a session context from disk, starting from `initial` when
    /// there is no usable snapshot
    pub async fn restore(
        &self,
        credential: CredentialHolder,
        initial: Preferences,
    ) -> Result<SessionContext> {
        let Some(snapshot) = self.load().await? else {
            return Ok(SessionContext::new(initial, credential));
        };
        tracing::debug!(saved = snapshot.saved_videos.len(), "session restored");
        Ok(SessionContext::restore(snapshot, credential))
    }

    /// Save a session context to disk
    pub async fn save(&self, session: &SessionContext) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent).await?;
        }
        let content = serde_json::to_string_pretty(&session.snapshot())?;
        fs::write(&self.path, content).await?;
        Ok(())
    }

    /// Remove the snapshot
    pub async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Tab, VideoSummary};

    fn scratch(name: &str) -> SessionFile {
        let path = std::env::temp_dir()
            .join(format!("nxt-watch-test-{}-{}", std::process::id(), name))
            .join("session.json");
        SessionFile::new(path)
    }

    #[tokio::test]
    async fn test_round_trip_keeps_order_and_preferences() {
        let file = scratch("round-trip");
        let session = SessionContext::default();
        session.set_tab(Tab::Gaming);
        session.set_theme(true);
        for id in ["b", "a"] {
            session.add_saved_video(VideoSummary {
                id: id.into(),
                title: id.into(),
                thumbnail_url: String::new(),
                channel_name: String::new(),
                view_count: 0,
                published_ago: "1 day".into(),
            });
        }

        file.save(&session).await.unwrap();
        let restored = file
            .restore(CredentialHolder::signed_out(), Preferences::default())
            .await
            .unwrap();
        file.clear().await.unwrap();

        assert_eq!(restored.preferences(), session.preferences());
        assert_eq!(restored.saved_videos(), session.saved_videos());
    }

    #[tokio::test]
    async fn test_first_run_uses_initial_preferences() {
        let file = scratch("first-run");
        let initial = Preferences {
            dark_theme: true,
            selected_tab: Tab::Trending,
            search_term: String::new(),
        };

        let session = file
            .restore(CredentialHolder::new(Some("T".into())), initial.clone())
            .await
            .unwrap();

        assert_eq!(session.preferences(), initial);
        assert!(session.saved_videos().is_empty());
        assert_eq!(session.token().as_deref(), Some("T"));
    }

    async fn write_corrupt(file: &SessionFile) {
        if let Some(parent) = file.path.parent() {
            fs::create_dir_all(parent).await.unwrap();
        }
        fs::write(&file.path, "{ not json").await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_nothing() {
        let file = scratch("corrupt");
        write_corrupt(&file).await;

        let snapshot = file.load().await.unwrap();
        file.clear().await.unwrap();

        assert!(snapshot.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_restores_initial_preferences() {
        let file = scratch("corrupt-restore");
        write_corrupt(&file).await;
        let initial = Preferences {
            dark_theme: true,
            selected_tab: Tab::Gaming,
            search_term: String::new(),
        };

        let session = file
            .restore(CredentialHolder::signed_out(), initial.clone())
            .await
            .unwrap();
        file.clear().await.unwrap();

        assert_eq!(session.preferences(), initial);
        assert!(session.saved_videos().is_empty());
    }
}
