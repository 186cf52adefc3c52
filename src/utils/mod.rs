//! Utilities: paths, relative ages

pub mod age;
pub mod paths;
