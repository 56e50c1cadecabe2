//! Write the RSS feed

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::posts;
use crate::feed::{feed_items, RssChannel};
use crate::Blog;

/// Render the feed of published posts
pub fn render(blog: &Blog) -> Result<Vec<u8>> {
    let loader = blog.loader()?;
    let published = posts::published(&loader)?;
    let items = feed_items(&published, blog.config.feed.limit);

    let channel = RssChannel {
        title: &blog.config.title,
        description: &blog.config.description,
        site: &blog.config.url,
        language: Some(blog.config.language.as_str()).filter(|l| !l.is_empty()),
    };

    let xml = channel.render(&items)?;
    tracing::info!("Rendered feed with {} items", items.len());
    Ok(xml)
}

/// Write the feed to `output`, or to the configured path under the public directory
pub fn run(blog: &Blog, output: Option<&Path>) -> Result<PathBuf> {
    let xml = render(blog)?;

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| blog.public_dir.join(&blog.config.feed.path));
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, xml)?;
    tracing::info!("Generated {:?}", output_path);

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let posts_dir = dir.path().join("src/content/posts");
        fs::create_dir_all(posts_dir.join("drafts")).unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "title: Test Blog\ndescription: Testing\nurl: https://blog.example.com/\n",
        )
        .unwrap();
        fs::write(
            posts_dir.join("hello.md"),
            "---\ntitle: Hello\ndesc: First post\nauthor: a\ndate: 2024-01-03\nimg: i.png\n---\nHi\n",
        )
        .unwrap();
        fs::write(
            posts_dir.join("drafts/secret.md"),
            "---\ntitle: Secret\ndesc: Not yet\nauthor: a\ndate: 2024-02-03\nimg: i.png\n---\nWIP\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_feed_contains_only_published() {
        let dir = site();
        let blog = Blog::new(dir.path()).unwrap();

        let xml = String::from_utf8(render(&blog).unwrap()).unwrap();
        assert!(xml.contains("<title>Test Blog</title>"));
        assert!(xml.contains("<link>https://blog.example.com/posts/hello</link>"));
        assert!(xml.contains("<description>First post</description>"));
        assert!(xml.contains("<pubDate>Wed, 3 Jan 2024 00:00:00 +0000</pubDate>"));
        assert!(!xml.contains("Secret"));
    }

    #[test]
    fn test_write_feed_to_public_dir() {
        let dir = site();
        let blog = Blog::new(dir.path()).unwrap();

        let path = blog.write_feed().unwrap();
        assert_eq!(path, dir.path().join("dist/rss.xml"));
        let written = fs::read_to_string(path).unwrap();
        assert!(written.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    }

    #[test]
    fn test_write_feed_to_explicit_path() {
        let dir = site();
        let blog = Blog::new(dir.path()).unwrap();
        let target = dir.path().join("out/feed.xml");

        let path = run(&blog, Some(&target)).unwrap();
        assert_eq!(path, target);
        assert!(target.exists());
    }
}
