//! Error types for the content layer

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching and validating a content collection.
///
/// A single failing entry fails the whole fetch; callers never see a
/// partially loaded collection.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Collection not found: {0}")]
    CollectionNotFound(PathBuf),

    #[error("Missing front-matter in {path}")]
    MissingFrontMatter { path: PathBuf },

    #[error("Failed to parse front-matter in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Missing required field `{field}` in {path}")]
    MissingField { path: PathBuf, field: &'static str },

    #[error("Invalid date `{value}` in {path}")]
    InvalidDate { path: PathBuf, value: String },

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentError {
    /// The source file the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ContentError::CollectionNotFound(path) => Some(path.as_path()),
            ContentError::MissingFrontMatter { path }
            | ContentError::FrontMatter { path, .. }
            | ContentError::MissingField { path, .. }
            | ContentError::InvalidDate { path, .. } => Some(path.as_path()),
            ContentError::Pattern(_) | ContentError::Io(_) => None,
        }
    }
}
