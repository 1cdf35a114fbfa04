//! Editorial article conversion functions.

use chrono::{DateTime, Utc};

use vaultline_core::BlogPost;
use vaultline_core::types::blog::DEFAULT_AUTHOR;

use crate::error::CatalogError;
use crate::images::convert_featured_image;
use crate::raw::RawArticle;

/// Convert a raw article node into a [`BlogPost`].
///
/// The publication timestamp is parsed as RFC 3339 and truncated to its UTC
/// calendar date. This is the layer's single loud failure: a missing or
/// unparsable timestamp cannot be defaulted without violating the post's
/// date invariant, so it surfaces as [`CatalogError::MalformedInput`] and
/// the caller decides whether to skip the record.
///
/// # Errors
///
/// Returns [`CatalogError::MalformedInput`] when `publishedAt` is absent or
/// not a valid timestamp.
pub fn convert_article(article: RawArticle) -> Result<BlogPost, CatalogError> {
    let title = article.title.unwrap_or_default();

    let published_at = article.published_at.ok_or_else(|| {
        CatalogError::MalformedInput("article has no publishedAt timestamp".to_string())
    })?;
    let date = DateTime::parse_from_rfc3339(&published_at)
        .map_err(|err| {
            CatalogError::MalformedInput(format!(
                "unparsable publishedAt {published_at:?}: {err}"
            ))
        })?
        .with_timezone(&Utc)
        .date_naive();

    let mut featured_image = convert_featured_image(article.image);
    if featured_image.alt_text.is_none() {
        featured_image.alt_text = Some(title.clone());
    }

    Ok(BlogPost {
        slug: article.handle.unwrap_or_default(),
        title,
        author: article
            .author_v2
            .and_then(|author| author.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        date,
        excerpt: article.excerpt.unwrap_or_default(),
        content: article.content_html.unwrap_or_default(),
        featured_image,
        tags: article.tags.unwrap_or_default(),
    })
}
