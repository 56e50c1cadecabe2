//! Content module - loads, validates and wraps blog posts

mod entry;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;
pub mod posts;

pub use entry::ContentEntry;
pub use frontmatter::{parse_date_string, FrontMatter, PostData};
pub use loader::{ContentLoader, DirectoryLoader};
pub use markdown::{Heading, MarkdownRenderer, RenderedContent, Renderer};
pub use post::{Post, PostSummary, DRAFTS_DIR, POSTS_PREFIX};
