//! Product and variant conversion functions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use vaultline_core::types::catalog::DEFAULT_CATEGORY;
use vaultline_core::types::money::DEFAULT_CURRENCY;
use vaultline_core::{Money, PriceRange, Product, ProductOption, SelectedOption, Variant};

use crate::connection::flatten;
use crate::images::{convert_featured_image, convert_image};
use crate::metafields::{flatten_metafields, resolve_archive_flags};
use crate::raw::{RawAmount, RawMoney, RawProduct, RawProductOption, RawSelectedOption, RawVariant};

// =============================================================================
// Money
// =============================================================================

/// Normalize a raw monetary value into canonical [`Money`].
///
/// String amounts get standard decimal parsing; numeric amounts are used
/// directly. A missing or unparsable amount becomes exactly zero, and
/// negative or zero amounts pass through unchanged. A missing currency code
/// becomes [`DEFAULT_CURRENCY`].
#[must_use]
pub fn convert_money(money: Option<RawMoney>) -> Money {
    let Some(money) = money else {
        return Money::zero();
    };

    let amount = match money.amount {
        Some(RawAmount::Number(value)) => Decimal::from_f64(value).unwrap_or_default(),
        Some(RawAmount::Text(text)) => text.trim().parse().unwrap_or_default(),
        None => Decimal::ZERO,
    };

    Money {
        amount,
        currency_code: money
            .currency_code
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
    }
}

// =============================================================================
// Variants
// =============================================================================

fn convert_selected_option(option: RawSelectedOption) -> SelectedOption {
    SelectedOption {
        name: option.name.unwrap_or_default(),
        value: option.value.unwrap_or_default(),
    }
}

fn convert_option(option: RawProductOption) -> ProductOption {
    ProductOption {
        name: option.name.unwrap_or_default(),
        values: option.values.unwrap_or_default(),
    }
}

/// Convert a raw purchasable-variant node.
///
/// The current `availableForSale` flag wins over the legacy `available`
/// field; the default of true applies only when both are wholly absent, so
/// an explicit false is never papered over. The price accepts either the
/// current `priceV2` field name or the legacy `price`.
#[must_use]
pub fn convert_variant(variant: RawVariant) -> Variant {
    Variant {
        gid: variant.id.unwrap_or_default(),
        title: variant.title.unwrap_or_default(),
        sku: variant.sku,
        available: variant.available_for_sale.or(variant.available).unwrap_or(true),
        price: convert_money(variant.price_v2.or(variant.price)),
        image: variant.image.map(convert_image),
        selected_options: variant
            .selected_options
            .unwrap_or_default()
            .into_iter()
            .map(convert_selected_option)
            .collect(),
    }
}

// =============================================================================
// Products
// =============================================================================

/// Convert a raw product node against a single clock reading.
///
/// `now` is the evaluation instant for the upcoming-release check; callers
/// sample it once per mapping call. Every output field is listed here
/// explicitly, including the derived archive flags, so nothing can be
/// silently shadowed by a merge.
#[must_use]
pub fn convert_product(product: RawProduct, now: DateTime<Utc>) -> Product {
    let metafields = flatten_metafields(product.metafields);
    let flags = resolve_archive_flags(&metafields, now);

    Product {
        gid: product.id.unwrap_or_default(),
        handle: product.handle.unwrap_or_default(),
        title: product.title.unwrap_or_default(),
        description: product.description.unwrap_or_default(),
        description_html: product.description_html,
        featured_image: convert_featured_image(product.featured_image),
        images: flatten(product.images).into_iter().map(convert_image).collect(),
        options: product
            .options
            .unwrap_or_default()
            .into_iter()
            .map(convert_option)
            .collect(),
        variants: flatten(product.variants).into_iter().map(convert_variant).collect(),
        price_range: PriceRange {
            min_variant_price: convert_money(
                product.price_range.and_then(|range| range.min_variant_price),
            ),
        },
        category: product
            .product_type
            .filter(|kind| !kind.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        specs: product.specs.unwrap_or_default(),
        is_new: product.is_new.unwrap_or(false),
        release_date: flags.release_date,
        is_vaulted: flags.is_vaulted,
        is_upcoming: flags.is_upcoming,
    }
}
