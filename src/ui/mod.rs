//! Terminal presentation: menus and rendering

pub mod render;
pub mod selector;
