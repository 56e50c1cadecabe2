//! Helper functions shared by the post model and the feed
//!
//! Presentation of dates and construction of absolute URLs.

mod date;
mod url;

pub use date::*;
pub use url::*;
