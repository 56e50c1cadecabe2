//! Post model

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

use super::{ContentEntry, RenderedContent, Renderer};
use crate::helpers;

/// URL prefix every post lives under
pub const POSTS_PREFIX: &str = "/posts/";

/// Directory name marking unpublished posts
pub const DRAFTS_DIR: &str = "drafts";

/// A blog post: a read-only view over one content entry.
///
/// All accessors are derived from the wrapped entry; a post never changes
/// after construction.
#[derive(Debug, Clone)]
pub struct Post {
    entry: ContentEntry,
}

impl Post {
    /// Wrap a content entry
    pub fn new(entry: ContentEntry) -> Self {
        Self { entry }
    }

    /// The wrapped entry
    pub fn entry(&self) -> &ContentEntry {
        &self.entry
    }

    /// Entry id as supplied by the loader
    pub fn id(&self) -> &str {
        &self.entry.id
    }

    /// Path relative to the posts collection.
    ///
    /// The id is normally relative already, but a `slug` override may be
    /// absolute (`/posts/...`). Only a leading `/posts/` is removed.
    pub fn relative_path(&self) -> &str {
        self.entry
            .id
            .strip_prefix(POSTS_PREFIX)
            .unwrap_or(&self.entry.id)
    }

    /// Site path of the post, always under `/posts/`
    pub fn full_path(&self) -> String {
        format!("{}{}", POSTS_PREFIX, self.relative_path())
    }

    pub fn title(&self) -> &str {
        &self.entry.data.title
    }

    pub fn author(&self) -> &str {
        &self.entry.data.author
    }

    pub fn description(&self) -> &str {
        &self.entry.data.desc
    }

    pub fn img(&self) -> &str {
        &self.entry.data.img
    }

    /// Publication date
    pub fn date(&self) -> DateTime<Utc> {
        self.entry.data.date
    }

    /// Milliseconds since the Unix epoch, used for ordering
    pub fn timestamp(&self) -> i64 {
        self.entry.data.date.timestamp_millis()
    }

    /// Date like "Jan 3, 2024"
    pub fn formatted_date(&self) -> String {
        helpers::medium_date(&self.entry.data.date)
    }

    /// Date like "2024-01-03"
    pub fn hyphenated_date(&self) -> String {
        helpers::hyphenated_date(&self.entry.data.date)
    }

    /// Whether the source file sits below a `drafts` directory
    pub fn is_draft(&self) -> bool {
        in_drafts_dir(&self.entry.file_path)
    }

    /// Markdown body
    pub fn body(&self) -> &str {
        &self.entry.body
    }

    /// Render the post body
    pub fn render(&self, renderer: &dyn Renderer) -> anyhow::Result<RenderedContent> {
        renderer.render(&self.entry)
    }

    /// Serializable snapshot of the derived fields
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id().to_string(),
            title: self.title().to_string(),
            description: self.description().to_string(),
            author: self.author().to_string(),
            img: self.img().to_string(),
            relative_path: self.relative_path().to_string(),
            full_path: self.full_path(),
            date: self.date(),
            timestamp: self.timestamp(),
            formatted_date: self.formatted_date(),
            hyphenated_date: self.hyphenated_date(),
            draft: self.is_draft(),
        }
    }
}

/// Derived post fields for listing pages and JSON output
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub img: String,
    pub relative_path: String,
    pub full_path: String,
    pub date: DateTime<Utc>,
    pub timestamp: i64,
    pub formatted_date: String,
    pub hyphenated_date: String,
    pub draft: bool,
}

/// A directory component equal to `drafts` anywhere above the file
fn in_drafts_dir(path: &Path) -> bool {
    path.parent()
        .map(|dir| dir.components().any(|c| c.as_os_str() == DRAFTS_DIR))
        .unwrap_or(false)
}
