use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::content::{ContentEntry, PostData};

/// A valid entry whose fields are derived from `id`
pub fn entry(id: &str, file_path: &str, date: DateTime<Utc>) -> ContentEntry {
    ContentEntry {
        id: id.to_string(),
        file_path: PathBuf::from(file_path),
        data: PostData {
            title: format!("Title of {}", id),
            desc: format!("About {}", id),
            author: "Nathan".to_string(),
            date,
            img: "/images/cover.png".to_string(),
            extra: HashMap::new(),
        },
        body: "# Heading\n\nBody.".to_string(),
    }
}
