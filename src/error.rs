//! Error types for nxt-watch

use thiserror::Error;

/// Broad error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Network errors
    TransportFailure,
    DecodeError,

    // User errors
    MissingCredential,
    InvalidConfig,
    UnknownTab,

    // System errors
    FileError,
}

/// Main error type for nxt-watch
#[derive(Error, Debug)]
pub enum NxtWatchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode video details: {0}")]
    Decode(String),

    #[error("Not signed in. Pass --token or set NXT_WATCH_TOKEN.")]
    MissingCredential,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NxtWatchError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Network(_) => ErrorCode::TransportFailure,
            Self::Decode(_) => ErrorCode::DecodeError,
            Self::MissingCredential => ErrorCode::MissingCredential,
            Self::InvalidConfig(_) => ErrorCode::InvalidConfig,
            Self::UnknownTab(_) => ErrorCode::UnknownTab,
            Self::File(_) => ErrorCode::FileError,
            Self::Http(e) if e.is_decode() => ErrorCode::DecodeError,
            Self::Http(_) => ErrorCode::TransportFailure,
            Self::Json(_) => ErrorCode::DecodeError,
        }
    }

    /// Whether the failure came from the wire rather than from the payload
    pub fn is_transport(&self) -> bool {
        self.code() == ErrorCode::TransportFailure
    }
}

pub type Result<T> = std::result::Result<T, NxtWatchError>;
