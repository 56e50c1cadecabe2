//! Render a single post

use anyhow::{anyhow, Result};

use crate::content::{posts, RenderedContent};
use crate::Blog;

/// Render the post at `path` (relative or `/posts/...`)
pub fn render(blog: &Blog, path: &str) -> Result<RenderedContent> {
    let loader = blog.loader()?;
    let post = posts::find(&loader, path)?.ok_or_else(|| anyhow!("Post not found: {}", path))?;

    tracing::info!("Rendering {} ({})", post.full_path(), post.formatted_date());
    post.render(&blog.renderer())
}

/// Print the rendered HTML of one post
pub fn run(blog: &Blog, path: &str) -> Result<()> {
    let rendered = render(blog, path)?;
    for heading in &rendered.headings {
        tracing::debug!("{} #{}", "#".repeat(heading.depth as usize), heading.slug);
    }
    println!("{}", rendered.html);
    Ok(())
}
