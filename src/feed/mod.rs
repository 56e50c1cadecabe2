//! RSS feed generation for published posts

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::io::Cursor;

use crate::content::Post;
use crate::helpers;

/// One feed entry, derived from a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub title: String,
    pub description: String,
    /// Site-relative link, e.g. `/posts/hello`
    pub link: String,
    pub pub_date: DateTime<Utc>,
}

impl From<&Post> for FeedItem {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title().to_string(),
            description: post.description().to_string(),
            link: post.full_path(),
            pub_date: post.date(),
        }
    }
}

/// Feed items for the given posts, in order, optionally truncated
pub fn feed_items(posts: &[Post], limit: Option<usize>) -> Vec<FeedItem> {
    posts
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(FeedItem::from)
        .collect()
}

/// RSS 2.0 channel metadata
pub struct RssChannel<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// Absolute site URL that item links are resolved against
    pub site: &'a str,
    pub language: Option<&'a str>,
}

impl<'a> RssChannel<'a> {
    /// Serialize the channel and its items
    pub fn render(&self, items: &[FeedItem]) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        writer.write_event(Event::Start(rss))?;
        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        push_text(&mut writer, "title", self.title)?;
        push_text(&mut writer, "description", self.description)?;
        push_text(&mut writer, "link", &helpers::full_url(self.site, "/"))?;
        if let Some(language) = self.language {
            push_text(&mut writer, "language", language)?;
        }

        for item in items {
            let link = helpers::full_url(self.site, &item.link);

            writer.write_event(Event::Start(BytesStart::new("item")))?;
            push_text(&mut writer, "title", &item.title)?;
            push_text(&mut writer, "link", &link)?;

            let mut guid = BytesStart::new("guid");
            guid.push_attribute(("isPermaLink", "true"));
            writer.write_event(Event::Start(guid))?;
            writer.write_event(Event::Text(BytesText::new(&link)))?;
            writer.write_event(Event::End(BytesEnd::new("guid")))?;

            push_text(&mut writer, "description", &item.description)?;
            push_text(&mut writer, "pubDate", &helpers::rfc2822(&item.pub_date))?;
            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        Ok(writer.into_inner().into_inner())
    }
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
