//! Post collections
//!
//! Every call fetches the collection afresh through the given loader; posts
//! are never cached between calls.

use super::loader::ContentLoader;
use super::Post;
use crate::error::ContentError;

/// Name of the collection holding blog posts
pub const COLLECTION: &str = "posts";

/// Every post, newest first. Posts with equal timestamps keep loader order.
pub fn all<L: ContentLoader + ?Sized>(loader: &L) -> Result<Vec<Post>, ContentError> {
    let mut posts: Vec<Post> = loader
        .load(COLLECTION)?
        .into_iter()
        .map(Post::new)
        .collect();

    // Stable sort keeps loader order for ties
    posts.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

    Ok(posts)
}

/// Posts outside a drafts directory, newest first
pub fn published<L: ContentLoader + ?Sized>(loader: &L) -> Result<Vec<Post>, ContentError> {
    Ok(all(loader)?.into_iter().filter(|p| !p.is_draft()).collect())
}

/// Posts inside a drafts directory, newest first
pub fn drafts<L: ContentLoader + ?Sized>(loader: &L) -> Result<Vec<Post>, ContentError> {
    Ok(all(loader)?.into_iter().filter(|p| p.is_draft()).collect())
}

/// Look a post up by its relative or full path
pub fn find<L: ContentLoader + ?Sized>(
    loader: &L,
    path: &str,
) -> Result<Option<Post>, ContentError> {
    let path = path.trim_end_matches('/');
    Ok(all(loader)?
        .into_iter()
        .find(|p| p.relative_path() == path || p.full_path() == path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::entry;
    use crate::content::ContentEntry;
    use chrono::{DateTime, TimeZone, Utc};
    use std::cell::Cell;
    use std::path::PathBuf;

    /// Serves a fixed set of entries and counts fetches
    struct FixtureLoader {
        entries: Vec<ContentEntry>,
        fetches: Cell<usize>,
    }

    impl FixtureLoader {
        fn new(entries: Vec<ContentEntry>) -> Self {
            Self {
                entries,
                fetches: Cell::new(0),
            }
        }
    }

    impl ContentLoader for FixtureLoader {
        fn load(&self, collection: &str) -> Result<Vec<ContentEntry>, ContentError> {
            assert_eq!(collection, COLLECTION);
            self.fetches.set(self.fetches.get() + 1);
            Ok(self.entries.clone())
        }
    }

    struct FailingLoader;

    impl ContentLoader for FailingLoader {
        fn load(&self, _collection: &str) -> Result<Vec<ContentEntry>, ContentError> {
            Err(ContentError::MissingField {
                path: PathBuf::from("src/content/posts/broken.md"),
                field: "title",
            })
        }
    }

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn published_entry(id: &str, date: DateTime<Utc>) -> ContentEntry {
        entry(id, &format!("src/content/posts/{}.md", id), date)
    }

    fn draft_entry(id: &str, date: DateTime<Utc>) -> ContentEntry {
        entry(
            &format!("drafts/{}", id),
            &format!("src/content/posts/drafts/{}.md", id),
            date,
        )
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id()).collect()
    }

    fn mixed_loader() -> FixtureLoader {
        FixtureLoader::new(vec![
            published_entry("a", day(2024, 1, 1)),
            draft_entry("b", day(2024, 5, 1)),
            published_entry("c", day(2024, 3, 1)),
            draft_entry("d", day(2023, 12, 1)),
            published_entry("e", day(2024, 4, 1)),
        ])
    }

    #[test]
    fn test_all_sorted_newest_first() {
        let loader = FixtureLoader::new(vec![
            published_entry("jan", day(2024, 1, 1)),
            published_entry("mar", day(2024, 3, 1)),
            published_entry("feb", day(2024, 2, 1)),
        ]);

        let all_posts = all(&loader).unwrap();
        assert_eq!(ids(&all_posts), vec!["mar", "feb", "jan"]);

        let published_posts = published(&loader).unwrap();
        assert_eq!(ids(&published_posts), vec!["mar", "feb", "jan"]);

        assert!(drafts(&loader).unwrap().is_empty());
    }

    #[test]
    fn test_timestamps_non_increasing() {
        let posts = all(&mixed_loader()).unwrap();
        assert_eq!(posts.len(), 5);
        assert!(posts
            .windows(2)
            .all(|pair| pair[0].timestamp() >= pair[1].timestamp()));
    }

    #[test]
    fn test_ties_keep_loader_order() {
        let loader = FixtureLoader::new(vec![
            published_entry("first", day(2024, 1, 1)),
            published_entry("newer", day(2024, 2, 1)),
            published_entry("second", day(2024, 1, 1)),
        ]);
        assert_eq!(ids(&all(&loader).unwrap()), vec!["newer", "first", "second"]);
    }

    #[test]
    fn test_published_and_drafts_partition_all() {
        let loader = mixed_loader();
        let all_posts = all(&loader).unwrap();
        let published_posts = published(&loader).unwrap();
        let draft_posts = drafts(&loader).unwrap();

        assert_eq!(ids(&published_posts), vec!["e", "c", "a"]);
        assert_eq!(ids(&draft_posts), vec!["drafts/b", "drafts/d"]);
        assert!(published_posts.iter().all(|p| !p.is_draft()));
        assert!(draft_posts.iter().all(|p| p.is_draft()));

        let expected_published: Vec<&str> = all_posts
            .iter()
            .filter(|p| !p.is_draft())
            .map(|p| p.id())
            .collect();
        let expected_drafts: Vec<&str> = all_posts
            .iter()
            .filter(|p| p.is_draft())
            .map(|p| p.id())
            .collect();
        assert_eq!(ids(&published_posts), expected_published);
        assert_eq!(ids(&draft_posts), expected_drafts);
        assert_eq!(published_posts.len() + draft_posts.len(), all_posts.len());
    }

    #[test]
    fn test_draft_scenario() {
        let loader = FixtureLoader::new(vec![
            published_entry("hello", day(2024, 1, 1)),
            entry(
                "drafts/unfinished",
                "/home/nathan/blog/src/content/posts/drafts/unfinished.md",
                day(2024, 6, 1),
            ),
        ]);

        let draft_ids = ids(&drafts(&loader).unwrap()).join(",");
        assert_eq!(draft_ids, "drafts/unfinished");

        let published_posts = published(&loader).unwrap();
        assert!(published_posts.iter().all(|p| p.id() != "drafts/unfinished"));
        assert_eq!(ids(&published_posts), vec!["hello"]);
    }

    #[test]
    fn test_every_call_fetches_again() {
        let loader = mixed_loader();
        all(&loader).unwrap();
        published(&loader).unwrap();
        drafts(&loader).unwrap();
        assert_eq!(loader.fetches.get(), 3);
    }

    #[test]
    fn test_loader_failure_propagates() {
        assert!(matches!(
            all(&FailingLoader),
            Err(ContentError::MissingField { field: "title", .. })
        ));
        assert!(published(&FailingLoader).is_err());
        assert!(drafts(&FailingLoader).is_err());
    }

    #[test]
    fn test_find_by_relative_or_full_path() {
        let loader = FixtureLoader::new(vec![
            published_entry("hello", day(2024, 1, 1)),
            entry("/posts/custom/slug", "src/content/posts/x.md", day(2024, 2, 1)),
        ]);

        let post = find(&loader, "hello").unwrap().unwrap();
        assert_eq!(post.full_path(), "/posts/hello");

        let post = find(&loader, "/posts/custom/slug/").unwrap().unwrap();
        assert_eq!(post.relative_path(), "custom/slug");

        assert!(find(&loader, "missing").unwrap().is_none());
    }

    #[test]
    fn test_works_through_trait_object() {
        let loader = mixed_loader();
        let dyn_loader: &dyn ContentLoader = &loader;
        assert_eq!(all(dyn_loader).unwrap().len(), 5);
    }
}
