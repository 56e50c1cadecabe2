//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format a date in en-US medium style (like "Jan 3, 2024")
pub fn medium_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%b %-d, %Y").to_string()
}

/// Format a date as zero-padded `YYYY-MM-DD`
pub fn hyphenated_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%d").to_string()
}

/// Format a date for RSS `<pubDate>` elements
pub fn rfc2822<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.to_rfc2822()
}
