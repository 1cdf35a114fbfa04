//! Collection conversion functions.

use chrono::{DateTime, Utc};

use vaultline_core::Collection;
use vaultline_core::types::catalog::{DEFAULT_SERIES, DEFAULT_STATUS};

use crate::connection::{flatten, raw_len};
use crate::images::convert_featured_image;
use crate::raw::RawCollection;

use super::products::convert_product;

/// Convert a raw collection node against a single clock reading.
///
/// Contained products are mapped fully, by value. The asset count falls
/// back to the raw products-list length, taken from the connection before
/// flattening so the fallback is independent of what mapping produces.
#[must_use]
pub fn convert_collection(collection: RawCollection, now: DateTime<Utc>) -> Collection {
    let raw_product_count = raw_len(collection.products.as_ref());

    Collection {
        gid: collection.id.unwrap_or_default(),
        handle: collection.handle.unwrap_or_default(),
        title: collection.title.unwrap_or_default(),
        description: collection.description.unwrap_or_default(),
        image: convert_featured_image(collection.image),
        products: flatten(collection.products)
            .into_iter()
            .map(|product| convert_product(product, now))
            .collect(),
        series: collection
            .series
            .filter(|series| !series.is_empty())
            .unwrap_or_else(|| DEFAULT_SERIES.to_string()),
        status: collection
            .status
            .filter(|status| !status.is_empty())
            .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        asset_count: collection
            .asset_count
            .unwrap_or_else(|| i64::try_from(raw_product_count).unwrap_or(i64::MAX)),
        scale: collection.scale,
        deployment_year: collection.deployment_year.unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 20, 10, 0, 0).single().expect("valid instant")
    }

    fn squadron_fixture() -> serde_json::Value {
        serde_json::json!({
            "id": "gid://catalog/Collection/7",
            "handle": "skull-squadron",
            "title": "Skull Squadron",
            "description": "First wave of the line.",
            "image": {"url": "https://cdn.shopify.com/s/files/1/hangar/skull.png"},
            "products": {"edges": [
                {"node": {"id": "gid://catalog/Product/1", "handle": "vf-1s-valkyrie", "title": "VF-1S"}},
                {"node": {"id": "gid://catalog/Product/2", "handle": "vf-1j-valkyrie", "title": "VF-1J"}},
            ]},
            "series": "Origins",
            "scale": "1:144",
        })
    }

    #[test]
    fn test_collection_mapping() {
        let raw: RawCollection = serde_json::from_value(squadron_fixture()).expect("collection");
        let collection = convert_collection(raw, fixed_now());

        assert_eq!(collection.handle, "skull-squadron");
        assert!(collection.image.url.ends_with("?width=1080&format=auto"));
        assert_eq!(collection.products.len(), 2);
        assert_eq!(collection.products[0].handle, "vf-1s-valkyrie");
        assert_eq!(collection.series, "Origins");
        assert_eq!(collection.scale.as_deref(), Some("1:144"));

        // Per-field defaults: status and deployment year were absent.
        assert_eq!(collection.status, "Active");
        assert_eq!(collection.deployment_year, 0);

        // Asset count falls back to the raw products-list length.
        assert_eq!(collection.asset_count, 2);
    }

    #[test]
    fn test_explicit_asset_count_is_preserved() {
        let mut fixture = squadron_fixture();
        fixture["assetCount"] = serde_json::json!(24);
        let raw: RawCollection = serde_json::from_value(fixture).expect("collection");
        let collection = convert_collection(raw, fixed_now());
        assert_eq!(collection.asset_count, 24);
    }

    #[test]
    fn test_empty_collection_defaults() {
        let collection = convert_collection(RawCollection::default(), fixed_now());
        assert_eq!(collection.products, vec![]);
        assert_eq!(collection.series, "Unclassified");
        assert_eq!(collection.status, "Active");
        assert_eq!(collection.asset_count, 0);
        assert!(collection.scale.is_none());
    }
}
