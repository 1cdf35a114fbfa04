//! Product and collection domain types.
//!
//! These types provide a clean, fully-defaulted API separate from the raw
//! upstream catalog records. Every optional-in-the-source field is either
//! resolved to a documented default or kept as an honest `Option`.

use serde::{Deserialize, Serialize};

use super::money::{Money, PriceRange};

/// Fallback category for products whose source omits a product type.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Fallback series identifier for collections.
pub const DEFAULT_SERIES: &str = "Unclassified";

/// Fallback lifecycle status for collections.
pub const DEFAULT_STATUS: &str = "Active";

// =============================================================================
// Image Types
// =============================================================================

/// Product, collection, or article image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Image {
    /// CDN-optimized image URL. Empty when the source had none.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

// =============================================================================
// Variant Types
// =============================================================================

/// Selected option on a product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Option name (e.g., "Scale", "Finish").
    pub name: String,
    /// Selected value (e.g., "1:144", "Matte").
    pub value: String,
}

/// Product option definition, used to drive variant selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    /// Option name (e.g., "Scale").
    pub name: String,
    /// Available values, in source order.
    pub values: Vec<String>,
}

/// A purchasable product variant (specific combination of options).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Opaque global identifier.
    pub gid: String,
    /// Variant title (combination of option values).
    pub title: String,
    /// SKU code.
    pub sku: Option<String>,
    /// Whether the variant can currently be ordered. Defaults to true only
    /// when the source omits the flag entirely; an explicit false is kept.
    pub available: bool,
    /// Current price.
    pub price: Money,
    /// Variant image.
    pub image: Option<Image>,
    /// Selected options for this variant, in source order.
    pub selected_options: Vec<SelectedOption>,
}

// =============================================================================
// Product Types
// =============================================================================

/// A catalog product.
///
/// The first variant is the default selection. `is_vaulted`, `is_upcoming`
/// and `release_date` are derived from the record's release metafields at
/// mapping time against an injected clock reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque global identifier.
    pub gid: String,
    /// URL-safe handle, unique per catalog.
    pub handle: String,
    /// Product title.
    pub title: String,
    /// Plain text description.
    pub description: String,
    /// HTML description, when the source provides one.
    pub description_html: Option<String>,
    /// Featured image. URL is empty when the source had none.
    pub featured_image: Image,
    /// All product images, in source order.
    pub images: Vec<Image>,
    /// Product options driving variant selection.
    pub options: Vec<ProductOption>,
    /// Product variants, in source order; first element is the default.
    pub variants: Vec<Variant>,
    /// Price range across variants.
    pub price_range: PriceRange,
    /// Product category. Falls back to [`DEFAULT_CATEGORY`].
    pub category: String,
    /// Free-form spec lines (dimensions, materials, ...).
    pub specs: Vec<String>,
    /// Whether the product is flagged as a new arrival.
    pub is_new: bool,
    /// Release date string from the release metafields, if any.
    pub release_date: Option<String>,
    /// Whether the product is vaulted (archived, not orderable).
    pub is_vaulted: bool,
    /// Whether the release date lies strictly in the future.
    pub is_upcoming: bool,
}

// =============================================================================
// Collection Types
// =============================================================================

/// A curated collection of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Opaque global identifier.
    pub gid: String,
    /// URL-safe handle.
    pub handle: String,
    /// Collection title.
    pub title: String,
    /// Plain text description.
    pub description: String,
    /// Collection image. URL is empty when the source had none.
    pub image: Image,
    /// Products in this collection, fully mapped, in source order.
    pub products: Vec<Product>,
    /// Series the collection belongs to. Falls back to [`DEFAULT_SERIES`].
    pub series: String,
    /// Lifecycle status. Falls back to [`DEFAULT_STATUS`].
    pub status: String,
    /// Number of assets in the collection. Falls back to the raw
    /// products-list length when the source does not state it.
    pub asset_count: i64,
    /// Physical scale of the assets (e.g., "1:144"), when known.
    pub scale: Option<String>,
    /// Year the line was first deployed; 0 when unknown.
    pub deployment_year: i64,
}
