//! Content loader - loads collection entries from the content directory

use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentEntry, FrontMatter};
use crate::error::ContentError;

/// Supplies the validated entries of a named collection
pub trait ContentLoader {
    /// Fetch every entry of `collection`, failing if any entry is invalid
    fn load(&self, collection: &str) -> Result<Vec<ContentEntry>, ContentError>;
}

/// Loads collections from `<root>/<collection>/` on disk
pub struct DirectoryLoader {
    root: PathBuf,
    pattern: Pattern,
    base: Option<PathBuf>,
}

impl DirectoryLoader {
    /// Create a loader for the given content root and file pattern
    pub fn new<P: AsRef<Path>>(root: P, pattern: &str) -> Result<Self, ContentError> {
        Ok(Self {
            root: root.as_ref().to_path_buf(),
            pattern: Pattern::new(pattern)?,
            base: None,
        })
    }

    /// Record entry file paths relative to `base` (the project directory),
    /// so directories above the project never affect an entry
    pub fn with_base<P: AsRef<Path>>(mut self, base: P) -> Self {
        self.base = Some(base.as_ref().to_path_buf());
        self
    }

    /// The content root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a single entry from a file
    fn load_entry(&self, collection_dir: &Path, path: &Path) -> Result<ContentEntry, ContentError> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content, path)?;

        let slug = fm.slug.clone();
        let data = fm.validate(path)?;

        let relative = path.strip_prefix(collection_dir).unwrap_or(path);
        let id = slug.unwrap_or_else(|| entry_id(relative));

        let file_path = self
            .base
            .as_deref()
            .and_then(|base| path.strip_prefix(base).ok())
            .unwrap_or(path)
            .to_path_buf();

        Ok(ContentEntry {
            id,
            file_path,
            data,
            body: body.to_string(),
        })
    }

    fn matches(&self, relative: &Path) -> bool {
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };
        self.pattern.matches_path_with(relative, options)
    }
}

impl ContentLoader for DirectoryLoader {
    fn load(&self, collection: &str) -> Result<Vec<ContentEntry>, ContentError> {
        let collection_dir = self.root.join(collection);
        if !collection_dir.is_dir() {
            return Err(ContentError::CollectionNotFound(collection_dir));
        }

        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        for entry in WalkDir::new(&collection_dir)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(&collection_dir).unwrap_or(path);
            if !self.matches(relative) {
                continue;
            }

            let content_entry = self.load_entry(&collection_dir, path)?;
            tracing::debug!("Loaded {:?} as `{}`", path, content_entry.id);

            if !seen.insert(content_entry.id.clone()) {
                tracing::warn!(
                    "Duplicate id `{}` in collection `{}` ({:?})",
                    content_entry.id,
                    collection,
                    path
                );
            }
            entries.push(content_entry);
        }

        tracing::info!("Loaded {} entries from `{}`", entries.len(), collection);

        Ok(entries)
    }
}

/// Relative path without extension, `/`-separated on every platform
fn entry_id(relative: &Path) -> String {
    relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
