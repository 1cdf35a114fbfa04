//! Vaultline Core - Shared types library.
//!
//! This crate provides the domain model shared across all Vaultline
//! components:
//! - `catalog` - catalog normalization layer (raw upstream nodes in, domain values out)
//! - any future consumer (rendering, feeds) that only needs the domain shapes
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no clients, no clocks.
//! Every value here is an immutable snapshot produced fresh by a mapping
//! call; nothing holds a reference back to its raw source or its container.
//!
//! # Modules
//!
//! - [`types`] - Domain value objects for products, collections, and posts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
