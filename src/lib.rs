//! blogcore: post model, collections and RSS feed for a markdown blog
//!
//! Posts are markdown files with YAML front-matter under
//! `<content_dir>/posts/`. They are loaded through a [`content::ContentLoader`],
//! wrapped as [`content::Post`]s, sorted newest first and split into
//! published posts and drafts by directory convention.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod helpers;
#[cfg(test)]
mod test_data;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{DirectoryLoader, MarkdownRenderer};

/// The blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root holding the collections
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog instance with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// Loader over the content directory; entry paths are project-relative
    pub fn loader(&self) -> Result<DirectoryLoader> {
        let loader = DirectoryLoader::new(&self.content_dir, &self.config.pattern)?;
        Ok(loader.with_base(&self.base_dir))
    }

    /// Markdown renderer using the highlight settings
    pub fn renderer(&self) -> MarkdownRenderer {
        MarkdownRenderer::with_options(
            &self.config.highlight.theme,
            self.config.highlight.line_number,
        )
    }

    /// Write the RSS feed of published posts
    pub fn write_feed(&self) -> Result<PathBuf> {
        commands::feed::run(self, None)
    }
}
