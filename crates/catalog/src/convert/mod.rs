//! Raw-node to domain-value conversion functions.
//!
//! One `convert_*` function per node kind. All are pure; the product and
//! collection mappers take the evaluation-time clock reading as an explicit
//! parameter so the derived release flags stay deterministic per call.

mod articles;
mod collections;
mod products;

pub use articles::convert_article;
pub use collections::convert_collection;
pub use products::{convert_money, convert_product, convert_variant};
