//! Catalog service: source lookups, normalization, and caching.
//!
//! Mirrors how the storefront consumes the layer: fetch a raw node from the
//! [`CatalogSource`], sample the clock once, run the pure mappers, and cache
//! the mapped result with `moka` (5-minute TTL).

use std::time::Duration;

use chrono::Utc;
use moka::future::Cache;
use tracing::{debug, instrument, warn};

use vaultline_core::{BlogPost, Collection, Product};

use crate::cache::CacheValue;
use crate::convert::{convert_article, convert_collection, convert_product};
use crate::error::CatalogError;
use crate::source::CatalogSource;

const CACHE_CAPACITY: u64 = 1000;
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Cached, normalized view over a [`CatalogSource`].
///
/// Products and collections are cached for 5 minutes; articles are cheap to
/// map and are not cached. Each lookup takes a single clock reading and
/// threads it through the mappers, so the derived release flags are
/// consistent within one call.
pub struct CatalogService<S> {
    source: S,
    cache: Cache<String, CacheValue>,
}

impl<S: CatalogSource> CatalogService<S> {
    /// Create a service over a catalog source.
    #[must_use]
    pub fn new(source: S) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self { source, cache }
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get a product by its handle.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has the handle, or
    /// any error the source reports.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn product_by_handle(&self, handle: &str) -> Result<Product, CatalogError> {
        let cache_key = format!("product:{handle}");

        if let Some(CacheValue::Product(product)) = self.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let raw = self
            .source
            .product_by_handle(handle)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Product not found: {handle}")))?;

        let product = convert_product(raw, Utc::now());

        self.cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// Get all products.
    ///
    /// # Errors
    ///
    /// Returns any error the source reports.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        let cache_key = "products:all".to_string();

        if let Some(CacheValue::Products(products)) = self.cache.get(&cache_key).await {
            debug!("Cache hit for products");
            return Ok(products);
        }

        // One reading for the whole batch keeps the flags mutually consistent.
        let now = Utc::now();
        let products: Vec<Product> = self
            .source
            .products()
            .await?
            .into_iter()
            .map(|raw| convert_product(raw, now))
            .collect();

        self.cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    // =========================================================================
    // Collection Methods
    // =========================================================================

    /// Get a collection by its handle.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no collection has the handle,
    /// or any error the source reports.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn collection_by_handle(&self, handle: &str) -> Result<Collection, CatalogError> {
        let cache_key = format!("collection:{handle}");

        if let Some(CacheValue::Collection(collection)) = self.cache.get(&cache_key).await {
            debug!("Cache hit for collection");
            return Ok(*collection);
        }

        let raw = self
            .source
            .collection_by_handle(handle)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Collection not found: {handle}")))?;

        let collection = convert_collection(raw, Utc::now());

        self.cache
            .insert(
                cache_key,
                CacheValue::Collection(Box::new(collection.clone())),
            )
            .await;

        Ok(collection)
    }

    /// Get all collections.
    ///
    /// # Errors
    ///
    /// Returns any error the source reports.
    #[instrument(skip(self))]
    pub async fn collections(&self) -> Result<Vec<Collection>, CatalogError> {
        let cache_key = "collections:all".to_string();

        if let Some(CacheValue::Collections(collections)) = self.cache.get(&cache_key).await {
            debug!("Cache hit for collections");
            return Ok(collections);
        }

        let now = Utc::now();
        let collections: Vec<Collection> = self
            .source
            .collections()
            .await?
            .into_iter()
            .map(|raw| convert_collection(raw, now))
            .collect();

        self.cache
            .insert(cache_key, CacheValue::Collections(collections.clone()))
            .await;

        Ok(collections)
    }

    // =========================================================================
    // Article Methods (not cached - cheap to map)
    // =========================================================================

    /// Get a blog post by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown slug and
    /// [`CatalogError::MalformedInput`] for a post whose publication
    /// timestamp cannot be parsed.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn post_by_slug(&self, slug: &str) -> Result<BlogPost, CatalogError> {
        let raw = self
            .source
            .article_by_slug(slug)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Post not found: {slug}")))?;

        convert_article(raw)
    }

    /// Get all blog posts.
    ///
    /// Posts with an unusable publication timestamp are skipped with a
    /// warning rather than failing the whole listing.
    ///
    /// # Errors
    ///
    /// Returns any error the source reports.
    #[instrument(skip(self))]
    pub async fn posts(&self) -> Result<Vec<BlogPost>, CatalogError> {
        let posts = self
            .source
            .articles()
            .await?
            .into_iter()
            .filter_map(|raw| match convert_article(raw) {
                Ok(post) => Some(post),
                Err(err) => {
                    warn!(error = %err, "Skipping unmappable article");
                    None
                }
            })
            .collect();

        Ok(posts)
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    /// Invalidate a cached product.
    pub async fn invalidate_product(&self, handle: &str) {
        self.cache.invalidate(&format!("product:{handle}")).await;
    }

    /// Invalidate a cached collection.
    pub async fn invalidate_collection(&self, handle: &str) {
        self.cache.invalidate(&format!("collection:{handle}")).await;
    }

    /// Invalidate all cached data.
    pub async fn invalidate_all(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }
}
