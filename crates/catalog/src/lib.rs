//! Vaultline catalog normalization layer.
//!
//! Converts heterogeneous upstream catalog records (product, variant,
//! collection, and article nodes in a GraphQL connection/edge shape with
//! optional and inconsistently-shaped fields) into the stable domain model
//! from `vaultline-core`.
//!
//! # Architecture
//!
//! - Mapping is a set of pure, synchronous functions: raw record in, flat
//!   fully-defaulted domain value out. No I/O, no shared state.
//! - The policy is **defaulting over failing**: a missing, null, or
//!   structurally unexpected field becomes a documented default. The one
//!   exception is an article's publication timestamp, which has no safe
//!   default and surfaces as [`CatalogError::MalformedInput`].
//! - The clock used for the upcoming-release check is an explicit
//!   parameter, sampled once per call at the service boundary, so mapping
//!   stays deterministic and testable.
//! - [`CatalogService`] wires a [`CatalogSource`] to the mappers and caches
//!   mapped products and collections via `moka` (5-minute TTL). The remote
//!   transport itself lives outside this crate; [`FixtureSource`] is the
//!   in-repo stand-in.
//!
//! # Example
//!
//! ```rust,ignore
//! use vaultline_catalog::{CatalogService, FixtureSource};
//!
//! let source = FixtureSource::from_document(fixture_json);
//! let service = CatalogService::new(source);
//!
//! let product = service.product_by_handle("vf-1s-valkyrie").await?;
//! assert!(!product.is_vaulted);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod cache;
pub mod connection;
pub mod convert;
pub mod error;
pub mod images;
pub mod metafields;
pub mod raw;
pub mod service;
pub mod source;

pub use error::CatalogError;
pub use service::CatalogService;
pub use source::{CatalogSource, FixtureSource};
