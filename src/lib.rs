//! nxt-watch library
//!
//! Session state, video detail fetching and reactions behind the
//! nxt-watch terminal client.

pub mod core;
pub mod error;
pub mod session;
pub mod storage;
pub mod types;
pub mod ui;
pub mod utils;
