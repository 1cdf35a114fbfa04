//! Image URL optimization.
//!
//! Catalog images are served from the upstream CDN, which honors sizing and
//! format hints passed as query parameters. URLs from other hosts (or URLs
//! that already carry a query string) pass through untouched.

use url::Url;

use vaultline_core::Image;

use crate::raw::RawImage;

/// Host whose URLs accept the optimization query.
pub const CDN_HOST: &str = "cdn.shopify.com";

/// Fixed sizing/format hint appended to bare CDN URLs.
pub const OPTIMIZATION_QUERY: &str = "width=1080&format=auto";

/// Rewrite an image URL to request a CDN-optimized variant.
///
/// Empty input stays empty; unparsable URLs and non-CDN hosts pass through
/// unchanged. The query is only appended when none is present, which makes
/// the transform idempotent: applying it to its own output is a no-op.
#[must_use]
pub fn optimize_url(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let Ok(parsed) = Url::parse(raw) else {
        return raw.to_string();
    };
    // A fragment would swallow an appended query, so those pass through too.
    if parsed.host_str() == Some(CDN_HOST)
        && parsed.query().is_none()
        && parsed.fragment().is_none()
    {
        format!("{raw}?{OPTIMIZATION_QUERY}")
    } else {
        raw.to_string()
    }
}

/// Convert a raw image, optimizing its URL and preserving its alt text.
pub(crate) fn convert_image(image: RawImage) -> Image {
    Image {
        url: image.url.as_deref().map(optimize_url).unwrap_or_default(),
        alt_text: image.alt_text,
    }
}

/// Convert a possibly-absent image into the non-optional domain shape.
pub(crate) fn convert_featured_image(image: Option<RawImage>) -> Image {
    image.map(convert_image).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdn_url_gets_optimization_query() {
        let url = "https://cdn.shopify.com/s/files/1/hangar/vf-1s.png";
        assert_eq!(
            optimize_url(url),
            "https://cdn.shopify.com/s/files/1/hangar/vf-1s.png?width=1080&format=auto"
        );
    }

    #[test]
    fn test_transform_is_idempotent() {
        let inputs = [
            "https://cdn.shopify.com/s/files/1/hangar/vf-1s.png",
            "https://cdn.shopify.com/s/files/1/hangar/vf-1s.png?width=200",
            "https://example.com/vf-1s.png",
            "not a url",
            "",
        ];
        for input in inputs {
            let once = optimize_url(input);
            assert_eq!(optimize_url(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_existing_query_is_preserved() {
        let url = "https://cdn.shopify.com/s/files/1/hangar/vf-1s.png?width=200";
        assert_eq!(optimize_url(url), url);
    }

    #[test]
    fn test_non_cdn_hosts_pass_through() {
        let url = "https://example.com/images/vf-1s.png";
        assert_eq!(optimize_url(url), url);
    }

    #[test]
    fn test_empty_and_unparsable_inputs() {
        assert_eq!(optimize_url(""), "");
        assert_eq!(optimize_url("::not-a-url::"), "::not-a-url::");
    }

    #[test]
    fn test_convert_featured_image_defaults() {
        let image = convert_featured_image(None);
        assert_eq!(image.url, "");
        assert!(image.alt_text.is_none());
    }
}
