//! Editorial blog post domain type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::Image;

/// Author name used when the source omits the author entirely.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// A published editorial article.
///
/// `date` is a calendar date (serialized as `YYYY-MM-DD`), derived from the
/// source's full publication timestamp in UTC. A post with an unparsable
/// timestamp is never constructed; the mapper surfaces that as an error
/// instead of defaulting, since this is the one field without a safe default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// URL-safe slug.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Author display name. Falls back to [`DEFAULT_AUTHOR`].
    pub author: String,
    /// Publication date, UTC calendar day of the source timestamp.
    pub date: NaiveDate,
    /// Short excerpt.
    pub excerpt: String,
    /// Rendered HTML body.
    pub content: String,
    /// Featured image; alt text falls back to the post title.
    pub featured_image: Image,
    /// Post tags, in source order.
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_serializes_as_calendar_string() {
        let post = BlogPost {
            slug: "hangar-notes".to_string(),
            title: "Hangar Notes".to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 20).expect("valid date"),
            excerpt: String::new(),
            content: String::new(),
            featured_image: Image::default(),
            tags: vec![],
        };
        let json = serde_json::to_value(&post).expect("serialize");
        assert_eq!(json["date"], serde_json::json!("2025-07-20"));
    }
}
