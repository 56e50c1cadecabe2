//! List posts

use anyhow::Result;

use crate::content::{posts, Post};
use crate::Blog;

/// List posts of the given kind: `all`, `published` or `drafts`
pub fn run(blog: &Blog, kind: &str, json: bool) -> Result<()> {
    let posts = select(blog, kind)?;
    println!("{}", format_posts(kind, &posts, json)?);
    Ok(())
}

/// Fetch the posts of one kind
pub fn select(blog: &Blog, kind: &str) -> Result<Vec<Post>> {
    let loader = blog.loader()?;
    let posts = match kind {
        "all" => posts::all(&loader)?,
        "published" | "post" | "posts" => posts::published(&loader)?,
        "drafts" | "draft" => posts::drafts(&loader)?,
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: all, published, drafts",
                kind
            );
        }
    };
    Ok(posts)
}

/// Render a post listing as text or JSON
pub fn format_posts(kind: &str, posts: &[Post], json: bool) -> Result<String> {
    if json {
        let summaries: Vec<_> = posts.iter().map(Post::summary).collect();
        return Ok(serde_json::to_string_pretty(&summaries)?);
    }

    let mut out = format!("Posts: {} ({})", kind, posts.len());
    for post in posts {
        out.push_str(&format!(
            "\n  {} - {} [{}]{}",
            post.hyphenated_date(),
            post.title(),
            post.full_path(),
            if post.is_draft() { " (draft)" } else { "" }
        ));
    }
    Ok(out)
}
