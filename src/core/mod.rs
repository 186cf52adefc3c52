//! Core modules: catalog client, detail fetcher, reactions

pub mod catalog;
pub mod fetcher;
pub mod reactions;
