//! Upstream catalog source interface and the in-repo fixture implementation.
//!
//! The production source is a remote GraphQL endpoint and lives outside
//! this crate; the normalization layer only ever sees already-deserialized
//! raw records. [`FixtureSource`] stands in for it here, serving nodes from
//! a JSON catalog document.

use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::raw::{RawArticle, RawCollection, RawProduct};

/// Read-side interface to the upstream catalog.
///
/// Implementations own all transport concerns (network, retries, request
/// de-duplication); this layer performs no waiting beyond the calls below.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// Look up a single product node by handle.
    async fn product_by_handle(&self, handle: &str) -> Result<Option<RawProduct>, CatalogError>;

    /// Fetch all product nodes.
    async fn products(&self) -> Result<Vec<RawProduct>, CatalogError>;

    /// Look up a single collection node by handle.
    async fn collection_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<RawCollection>, CatalogError>;

    /// Fetch all collection nodes.
    async fn collections(&self) -> Result<Vec<RawCollection>, CatalogError>;

    /// Look up a single article node by its handle (the post slug).
    async fn article_by_slug(&self, slug: &str) -> Result<Option<RawArticle>, CatalogError>;

    /// Fetch all article nodes.
    async fn articles(&self) -> Result<Vec<RawArticle>, CatalogError>;
}

/// In-memory catalog source backed by a JSON document.
///
/// The document mirrors the upstream response shape: top-level `products`,
/// `collections`, and `articles` arrays of raw nodes. Nodes are
/// deserialized on demand, so a document can carry records this crate does
/// not consume.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    products: Vec<serde_json::Value>,
    collections: Vec<serde_json::Value>,
    articles: Vec<serde_json::Value>,
}

impl FixtureSource {
    /// Build a source from a catalog document.
    ///
    /// Missing or non-array sections are treated as empty.
    #[must_use]
    pub fn from_document(mut document: serde_json::Value) -> Self {
        let mut section = |name: &str| match document.get_mut(name).map(serde_json::Value::take) {
            Some(serde_json::Value::Array(nodes)) => nodes,
            _ => Vec::new(),
        };
        Self {
            products: section("products"),
            collections: section("collections"),
            articles: section("articles"),
        }
    }

    fn find<T: DeserializeOwned>(
        nodes: &[serde_json::Value],
        key: &str,
        wanted: &str,
    ) -> Result<Option<T>, CatalogError> {
        nodes
            .iter()
            .find(|node| node.get(key).and_then(serde_json::Value::as_str) == Some(wanted))
            .map(|node| serde_json::from_value(node.clone()))
            .transpose()
            .map_err(CatalogError::from)
    }

    fn all<T: DeserializeOwned>(nodes: &[serde_json::Value]) -> Result<Vec<T>, CatalogError> {
        nodes
            .iter()
            .map(|node| serde_json::from_value(node.clone()))
            .collect::<Result<_, _>>()
            .map_err(CatalogError::from)
    }
}

impl CatalogSource for FixtureSource {
    async fn product_by_handle(&self, handle: &str) -> Result<Option<RawProduct>, CatalogError> {
        Self::find(&self.products, "handle", handle)
    }

    async fn products(&self) -> Result<Vec<RawProduct>, CatalogError> {
        Self::all(&self.products)
    }

    async fn collection_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<RawCollection>, CatalogError> {
        Self::find(&self.collections, "handle", handle)
    }

    async fn collections(&self) -> Result<Vec<RawCollection>, CatalogError> {
        Self::all(&self.collections)
    }

    async fn article_by_slug(&self, slug: &str) -> Result<Option<RawArticle>, CatalogError> {
        Self::find(&self.articles, "handle", slug)
    }

    async fn articles(&self) -> Result<Vec<RawArticle>, CatalogError> {
        Self::all(&self.articles)
    }
}
