//! Raw content entries as yielded by a content loader

use std::path::PathBuf;

use super::frontmatter::PostData;

/// An unprocessed, validated entry of a content collection
#[derive(Debug, Clone)]
pub struct ContentEntry {
    /// Relative path within the collection without extension, or the
    /// `slug` front-matter override
    pub id: String,

    /// Path of the source file
    pub file_path: PathBuf,

    /// Validated front-matter
    pub data: PostData,

    /// Markdown body following the front-matter
    pub body: String,
}
