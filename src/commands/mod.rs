//! CLI commands

pub mod feed;
pub mod list;
pub mod render;
