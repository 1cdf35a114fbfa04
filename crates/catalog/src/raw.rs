//! Raw upstream catalog records.
//!
//! One optional-field struct per node kind, matching the upstream GraphQL
//! field names (camelCase on the wire). Mapping is a total function from
//! these shapes to the domain model; nothing here is ever constructed by
//! hand outside of tests.
//!
//! Polymorphic fields (connections, metafields, money amounts) deserialize
//! leniently via [`lenient`]: a value that does not match any expected shape
//! degrades to absent instead of failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::metafields::Metafield;

/// Deserialize a polymorphic field, degrading unrecognized shapes to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// =============================================================================
// Connection shapes
// =============================================================================

/// One element of an edge-wrapped connection.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEdge<T> {
    /// The wrapped element. Edges without a node are dropped on flattening.
    pub node: Option<T>,
}

/// A paginated-connection-shaped list.
///
/// Upstream responses expose either a flat `nodes` list or an edge-wrapped
/// `edges` list; both fields are optional and `nodes` wins when both appear.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConnection<T> {
    /// Directly-usable flat list.
    pub nodes: Option<Vec<T>>,
    /// Edge-wrapped list.
    pub edges: Option<Vec<RawEdge<T>>>,
}

impl<T> Default for RawConnection<T> {
    fn default() -> Self {
        Self {
            nodes: None,
            edges: None,
        }
    }
}

// =============================================================================
// Scalar-ish shapes
// =============================================================================

/// A monetary amount as it arrives from upstream: decimal string or number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// Already-numeric amount, used directly.
    Number(f64),
    /// Decimal string, parsed with standard decimal parsing.
    Text(String),
}

/// Raw monetary value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMoney {
    #[serde(default, deserialize_with = "lenient")]
    pub amount: Option<RawAmount>,
    pub currency_code: Option<String>,
}

/// Raw image reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImage {
    pub url: Option<String>,
    pub alt_text: Option<String>,
}

/// Raw price range; only the minimum variant price is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPriceRange {
    pub min_variant_price: Option<RawMoney>,
}

/// The `metafields` property in any of its wire shapes: a flat array
/// (possibly holding nulls for unmatched identifiers) or a connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawMetafields {
    Flat(Vec<Option<Metafield>>),
    Connection(RawConnection<Metafield>),
}

// =============================================================================
// Product nodes
// =============================================================================

/// Raw selected option on a variant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSelectedOption {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// Raw product option definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProductOption {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub values: Option<Vec<String>>,
}

/// Raw purchasable-variant node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariant {
    pub id: Option<String>,
    pub title: Option<String>,
    pub sku: Option<String>,
    /// Current availability flag.
    pub available_for_sale: Option<bool>,
    /// Legacy availability flag, consulted when the current one is absent.
    pub available: Option<bool>,
    /// Current price field name.
    pub price_v2: Option<RawMoney>,
    /// Legacy price field name.
    pub price: Option<RawMoney>,
    pub image: Option<RawImage>,
    #[serde(default, deserialize_with = "lenient")]
    pub selected_options: Option<Vec<RawSelectedOption>>,
}

/// Raw product node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: Option<String>,
    pub handle: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub description_html: Option<String>,
    pub featured_image: Option<RawImage>,
    #[serde(default, deserialize_with = "lenient")]
    pub images: Option<RawConnection<RawImage>>,
    #[serde(default, deserialize_with = "lenient")]
    pub options: Option<Vec<RawProductOption>>,
    #[serde(default, deserialize_with = "lenient")]
    pub variants: Option<RawConnection<RawVariant>>,
    pub price_range: Option<RawPriceRange>,
    pub product_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub specs: Option<Vec<String>>,
    pub is_new: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub metafields: Option<RawMetafields>,
}

// =============================================================================
// Collection nodes
// =============================================================================

/// Raw collection node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCollection {
    pub id: Option<String>,
    pub handle: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<RawImage>,
    #[serde(default, deserialize_with = "lenient")]
    pub products: Option<RawConnection<RawProduct>>,
    pub series: Option<String>,
    pub status: Option<String>,
    pub asset_count: Option<i64>,
    pub scale: Option<String>,
    pub deployment_year: Option<i64>,
}

// =============================================================================
// Article nodes
// =============================================================================

/// Raw article author wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthor {
    pub name: Option<String>,
}

/// Raw editorial-article node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub id: Option<String>,
    pub handle: Option<String>,
    pub title: Option<String>,
    pub author_v2: Option<RawAuthor>,
    /// ISO-8601 publication timestamp. The one field with no safe default.
    pub published_at: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<RawImage>,
    #[serde(default, deserialize_with = "lenient")]
    pub tags: Option<Vec<String>>,
    pub content_html: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_field_degrades_to_absent() {
        // A metafields value of the wrong type must not sink the record.
        let product: RawProduct = serde_json::from_value(serde_json::json!({
            "id": "gid://catalog/Product/1",
            "metafields": "not-a-metafield-shape"
        }))
        .expect("record still deserializes");
        assert_eq!(product.id.as_deref(), Some("gid://catalog/Product/1"));
        assert!(product.metafields.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let variant: RawVariant = serde_json::from_value(serde_json::json!({
            "id": "gid://catalog/Variant/1",
            "quantityAvailable": 3,
            "barcode": "0000"
        }))
        .expect("unknown fields ignored");
        assert_eq!(variant.id.as_deref(), Some("gid://catalog/Variant/1"));
    }

    #[test]
    fn test_amount_accepts_string_and_number() {
        let text: RawMoney =
            serde_json::from_value(serde_json::json!({"amount": "249.0"})).expect("string amount");
        assert!(matches!(text.amount, Some(RawAmount::Text(ref s)) if s == "249.0"));

        let number: RawMoney =
            serde_json::from_value(serde_json::json!({"amount": 249.0})).expect("numeric amount");
        assert!(matches!(number.amount, Some(RawAmount::Number(_))));

        let garbage: RawMoney =
            serde_json::from_value(serde_json::json!({"amount": {"deep": true}}))
                .expect("garbage amount degrades");
        assert!(garbage.amount.is_none());
    }
}
