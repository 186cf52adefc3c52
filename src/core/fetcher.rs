//! Per-view video detail fetch lifecycle
//!
//! `Idle -> Loading -> Ready | Failed`. Each load records the request it was
//! made for; a response is only applied while that request is still the
//! current one, so a slow answer for a previous id can never overwrite the
//! view of the id the user has since moved to.

use crate::core::catalog::{normalize, VideoSource};
use crate::error::Result;
use crate::types::VideoDetail;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::watch;

/// Lifecycle of one video detail retrieval
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Ready(VideoDetail),
    Failed,
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed)
    }

    pub fn detail(&self) -> Option<&VideoDetail> {
        match self {
            FetchState::Ready(detail) => Some(detail),
            _ => None,
        }
    }
}

/// The id and credential a load was issued with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: String,
    pub token: String,
}

/// What subscribed views observe
#[derive(Debug, Clone, Default)]
pub struct FetchSnapshot {
    pub request: Option<FetchRequest>,
    pub state: FetchState,
    generation: u64,
}

/// Fetches and holds the detail record for whichever video a view shows
#[derive(Clone)]
pub struct VideoDetailFetcher {
    source: Arc<dyn VideoSource>,
    slot: Arc<watch::Sender<FetchSnapshot>>,
}

impl std::fmt::Debug for VideoDetailFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoDetailFetcher")
            .field("slot", &*self.slot.borrow())
            .finish_non_exhaustive()
    }
}

impl VideoDetailFetcher {
    pub fn new(source: Arc<dyn VideoSource>) -> Self {
        let (slot, _) = watch::channel(FetchSnapshot::default());
        Self {
            source,
            slot: Arc::new(slot),
        }
    }

    /// Current visible state
    pub fn state(&self) -> FetchState {
        self.slot.borrow().state.clone()
    }

    /// The request the visible state belongs to
    pub fn request(&self) -> Option<FetchRequest> {
        self.slot.borrow().request.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchSnapshot> {
        self.slot.subscribe()
    }

    /// Load `id`, superseding any load still in flight
    pub async fn load(&self, id: &str, token: &str) -> FetchState {
        let request = FetchRequest {
            id: id.to_string(),
            token: token.to_string(),
        };
        let generation = self.begin(request.clone());

        let outcome = self.fetch(&request).await;
        self.finish(generation, &request, outcome);

        self.state()
    }

    /// Re-issue the current request as-is. Does nothing before the first load.
    pub async fn retry(&self) -> FetchState {
        let Some(request) = self.request() else {
            return self.state();
        };
        tracing::debug!(id = %request.id, "retrying video details");
        self.load(&request.id, &request.token).await
    }

    /// Load `id` unless it is already the current request
    pub async fn on_id_changed(&self, id: &str, token: &str) -> FetchState {
        let unchanged = self
            .slot
            .borrow()
            .request
            .as_ref()
            .is_some_and(|r| r.id == id);
        if unchanged {
            return self.state();
        }
        self.load(id, token).await
    }

    /// Drop the detail and ignore anything still in flight
    pub fn unmount(&self) {
        self.slot.send_modify(|slot| {
            slot.generation += 1;
            slot.request = None;
            slot.state = FetchState::Idle;
        });
    }

    fn begin(&self, request: FetchRequest) -> u64 {
        let mut generation = 0;
        self.slot.send_modify(|slot| {
            slot.generation += 1;
            generation = slot.generation;
            tracing::debug!(id = %request.id, generation, "loading video details");
            slot.request = Some(request);
            slot.state = FetchState::Loading;
        });
        generation
    }

    async fn fetch(&self, request: &FetchRequest) -> Result<VideoDetail> {
        let raw = self.source.fetch_video(&request.id, &request.token).await?;
        normalize(raw, Utc::now())
    }

    fn finish(&self, generation: u64, request: &FetchRequest, outcome: Result<VideoDetail>) {
        let state = match outcome {
            Ok(detail) => FetchState::Ready(detail),
            Err(e) if e.is_transport() => {
                tracing::warn!(id = %request.id, error = %e, "video details request failed");
                FetchState::Failed
            }
            Err(e) => {
                tracing::error!(id = %request.id, error = %e, "malformed video details");
                FetchState::Failed
            }
        };

        let applied = self.slot.send_if_modified(|slot| {
            let current = slot.generation == generation
                && slot.request.as_ref().is_some_and(|r| r.id == request.id);
            if current {
                slot.state = state;
            }
            current
        });

        if !applied {
            tracing::debug!(id = %request.id, generation, "discarding stale video details");
        }
    }
}
