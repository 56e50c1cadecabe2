//! Front-matter parsing and schema validation

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::ContentError;

/// Front-matter as written in a post, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub desc: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub img: Option<String>,
    /// Overrides the entry id derived from the file path
    pub slug: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// Validated post data. Every required field is present and the date is parsed.
#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub title: String,
    pub desc: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub img: String,
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse<'a>(content: &'a str, path: &Path) -> Result<(Self, &'a str), ContentError> {
        let (yaml, body) = split(content).ok_or_else(|| ContentError::MissingFrontMatter {
            path: path.to_path_buf(),
        })?;

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml).map_err(|source| {
            ContentError::FrontMatter {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok((fm, body))
    }

    /// Check the post schema: `title`, `desc`, `author`, `date` and `img` are
    /// required and `date` must parse.
    pub fn validate(self, path: &Path) -> Result<PostData, ContentError> {
        let title = required(self.title, "title", path)?;
        let desc = required(self.desc, "desc", path)?;
        let author = required(self.author, "author", path)?;
        let raw_date = required(self.date, "date", path)?;
        let img = required(self.img, "img", path)?;

        let date = parse_date_string(&raw_date).ok_or_else(|| ContentError::InvalidDate {
            path: path.to_path_buf(),
            value: raw_date.clone(),
        })?;

        Ok(PostData {
            title,
            desc,
            author,
            date,
            img,
            extra: self.extra,
        })
    }
}

fn required(value: Option<String>, field: &'static str, path: &Path) -> Result<String, ContentError> {
    value.ok_or_else(|| ContentError::MissingField {
        path: path.to_path_buf(),
        field,
    })
}

/// Split a `---` delimited YAML block from the markdown body
fn split(content: &str) -> Option<(&str, &str)> {
    let content = content.trim_start_matches('\u{feff}');
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    // Empty block: closing delimiter right after the opening one
    if let Some(after) = rest.strip_prefix("---") {
        return Some(("", after.trim_start_matches(['\n', '\r'])));
    }

    let end_pos = rest.find("\n---")?;
    let yaml = &rest[..end_pos];
    let remaining = &rest[end_pos + 4..];
    Some((yaml, remaining.trim_start_matches(['\n', '\r'])))
}

/// Parse a date string in various formats. Values without an offset are UTC.
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // YAML timestamps may separate the offset with a space
    for fmt in ["%Y-%m-%d %H:%M:%S%.f %:z", "%Y-%m-%d %H:%M:%S%.f%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
