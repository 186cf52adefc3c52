//! Storage modules: config, session snapshot

pub mod config;
pub mod session;
