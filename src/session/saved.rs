//! Saved videos collection

use crate::types::VideoSummary;
use std::sync::Arc;
use tokio::sync::watch;

/// Saved videos in first-save order, unique by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedVideos {
    videos: Vec<VideoSummary>,
}

impl SavedVideos {
    /// Append `summary` unless its id is already present. Returns whether it was added.
    pub fn add(&mut self, summary: VideoSummary) -> bool {
        if self.contains(&summary.id) {
            return false;
        }
        self.videos.push(summary);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.videos.iter().any(|v| v.id == id)
    }

    pub fn as_slice(&self) -> &[VideoSummary] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Shared handle to the saved videos; subscribers are notified only when an add lands
#[derive(Debug, Clone)]
pub struct SavedVideosStore {
    sender: Arc<watch::Sender<SavedVideos>>,
}

impl SavedVideosStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(SavedVideos::default());
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn add_saved_video(&self, summary: VideoSummary) -> bool {
        let id = summary.id.clone();
        let added = self.sender.send_if_modified(|saved| saved.add(summary));
        if added {
            tracing::debug!(%id, "video saved");
        } else {
            tracing::debug!(%id, "video already saved");
        }
        added
    }

    /// Snapshot in first-save order
    pub fn list(&self) -> Vec<VideoSummary> {
        self.sender.borrow().as_slice().to_vec()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sender.borrow().contains(id)
    }

    pub fn len(&self) -> usize {
        self.sender.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sender.borrow().is_empty()
    }

    pub fn subscribe(&self) -> watch::Receiver<SavedVideos> {
        self.sender.subscribe()
    }
}

impl Default for SavedVideosStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, title: &str) -> VideoSummary {
        VideoSummary {
            id: id.into(),
            title: title.into(),
            thumbnail_url: format!("https://img/{}.png", id),
            channel_name: "Channel".into(),
            view_count: 10,
            published_ago: "3 days".into(),
        }
    }

    #[test]
    fn test_insertion_order() {
        let store = SavedVideosStore::new();
        let v1 = summary("1", "first");
        let v2 = summary("2", "second");

        assert!(store.add_saved_video(v1.clone()));
        assert!(store.add_saved_video(v2.clone()));

        assert_eq!(store.list(), vec![v1, v2]);
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let store = SavedVideosStore::new();
        let v1 = summary("1", "first");
        let v2 = summary("2", "second");

        store.add_saved_video(v1.clone());
        store.add_saved_video(v2.clone());
        // same id, different payload: first write wins, position kept
        assert!(!store.add_saved_video(summary("1", "renamed")));
        assert!(!store.add_saved_video(v1.clone()));

        assert_eq!(store.list(), vec![v1, v2]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_until_first_add() {
        let store = SavedVideosStore::new();
        assert!(store.is_empty());

        store.add_saved_video(summary("1", "first"));
        store.add_saved_video(summary("1", "first"));

        assert!(!store.is_empty());
        assert_eq!(store.len(), 1);
        assert!(store.contains("1"));
    }

    #[test]
    fn test_subscribers_skip_duplicate_adds() {
        let store = SavedVideosStore::new();
        let mut page = store.subscribe();

        store.add_saved_video(summary("1", "first"));
        assert!(page.has_changed().unwrap());
        let _ = page.borrow_and_update();

        store.add_saved_video(summary("1", "first"));
        assert!(!page.has_changed().unwrap());
    }
}
