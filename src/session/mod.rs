//! Session state: credential, preferences, saved videos

pub mod context;
pub mod credential;
pub mod preferences;
pub mod saved;

pub use context::SessionContext;
pub use credential::CredentialHolder;
pub use preferences::PreferencesStore;
pub use saved::{SavedVideos, SavedVideosStore};
