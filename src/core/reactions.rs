//! Like, dislike and save state for the video on screen

use crate::session::SessionContext;
use crate::types::{VideoDetail, VideoSummary};

/// Like and dislike are mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reaction {
    #[default]
    None,
    Liked,
    Disliked,
}

/// Flattened view of the tracker for highlighting icons and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionState {
    pub liked: bool,
    pub disliked: bool,
    pub saved: bool,
}

/// Tracks reactions for one displayed video. Not persisted, not shared.
///
/// Un-saving only clears the local flag; the saved list never shrinks.
#[derive(Debug, Clone)]
pub struct ReactionTracker {
    session: SessionContext,
    video_id: Option<String>,
    reaction: Reaction,
    saved: bool,
}

impl ReactionTracker {
    pub fn new(session: SessionContext) -> Self {
        Self {
            session,
            video_id: None,
            reaction: Reaction::None,
            saved: false,
        }
    }

    pub fn video_id(&self) -> Option<&str> {
        self.video_id.as_deref()
    }

    pub fn reaction(&self) -> Reaction {
        self.reaction
    }

    pub fn state(&self) -> ReactionState {
        ReactionState {
            liked: self.reaction == Reaction::Liked,
            disliked: self.reaction == Reaction::Disliked,
            saved: self.saved,
        }
    }

    /// Reset everything when the displayed video changes
    pub fn on_video_changed(&mut self, id: &str) {
        if self.video_id.as_deref() == Some(id) {
            return;
        }
        tracing::debug!(id, "reactions reset");
        self.video_id = Some(id.to_string());
        self.reaction = Reaction::None;
        self.saved = false;
    }

    pub fn toggle_like(&mut self) -> ReactionState {
        self.reaction = match self.reaction {
            Reaction::Liked => Reaction::None,
            Reaction::None | Reaction::Disliked => Reaction::Liked,
        };
        self.state()
    }

    pub fn toggle_dislike(&mut self) -> ReactionState {
        self.reaction = match self.reaction {
            Reaction::Disliked => Reaction::None,
            Reaction::None | Reaction::Liked => Reaction::Disliked,
        };
        self.state()
    }

    /// Flip the saved flag; saving forwards the summary to the session's saved list
    pub fn toggle_save(&mut self, detail: &VideoDetail) -> VideoSummary {
        self.on_video_changed(&detail.id);

        self.saved = !self.saved;
        let summary = detail.summary();
        if self.saved {
            self.session.add_saved_video(summary.clone());
        }
        summary
    }
}
