//! Domain value objects for the Vaultline catalog.
//!
//! These are the fully-defaulted output shapes of the normalization layer.
//! Collections contain products by value, products contain variants by
//! value; equality-by-identity and caching are the caller's concern.

pub mod blog;
pub mod catalog;
pub mod money;

pub use blog::BlogPost;
pub use catalog::{Collection, Image, Product, ProductOption, SelectedOption, Variant};
pub use money::{Money, PriceRange};
