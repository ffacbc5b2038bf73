//! Catalog fetchers.
//!
//! One function per page-level query. Each one asks the [`ContentSource`]
//! for a content type, deserializes the raw objects into typed entities, and
//! folds every possible result into a [`Fetched`] outcome:
//!
//! - a CMS "no objects matched" answer becomes `NotFound` (single lookups)
//!   or `Empty` (lists);
//! - transport, status, and payload failures are logged here and become
//!   `Failed`, so callers never see an `Err`.

mod outcome;

pub use outcome::{FetchFailure, Fetched};

use std::sync::Arc;

use cosmic_shop_core::{CollectionId, ProductId, Slug};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::cosmic::{
    Collection, ContentSource, ContentType, CosmicError, ObjectQuery, Product, Review,
};

/// Props returned for products.
const PRODUCT_PROPS: &[&str] = &["id", "title", "slug", "thumbnail", "metadata"];

/// Props returned for collections and reviews.
const OBJECT_PROPS: &[&str] = &["id", "title", "slug", "metadata"];

/// Expand one level of relations (a product's collection, a review's product).
const RELATION_DEPTH: u8 = 1;

/// Typed, failure-absorbing access to catalog content.
#[derive(Clone)]
pub struct Catalog {
    source: Arc<dyn ContentSource>,
}

impl Catalog {
    /// Create a catalog over a content source.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    // =========================================================================
    // Collections
    // =========================================================================

    /// Look up a collection by slug.
    #[instrument(skip(self, slug), fields(slug = %slug))]
    pub async fn collection_by_slug(&self, slug: &Slug) -> Fetched<Collection> {
        let query = ObjectQuery::new(ContentType::Collections)
            .filter("slug", slug.as_str())
            .props(OBJECT_PROPS)
            .depth(RELATION_DEPTH)
            .limit(1);
        self.one(&query).await
    }

    /// Fetch every collection.
    #[instrument(skip(self))]
    pub async fn collections(&self) -> Fetched<Vec<Collection>> {
        let query = ObjectQuery::new(ContentType::Collections)
            .props(OBJECT_PROPS)
            .depth(RELATION_DEPTH);
        self.many(&query).await
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Look up a product by slug.
    #[instrument(skip(self, slug), fields(slug = %slug))]
    pub async fn product_by_slug(&self, slug: &Slug) -> Fetched<Product> {
        let query = ObjectQuery::new(ContentType::Products)
            .filter("slug", slug.as_str())
            .props(PRODUCT_PROPS)
            .depth(RELATION_DEPTH)
            .limit(1);
        self.one(&query).await
    }

    /// Fetch the products that belong to a collection.
    #[instrument(skip(self, collection_id), fields(collection_id = %collection_id))]
    pub async fn products_in_collection(
        &self,
        collection_id: &CollectionId,
    ) -> Fetched<Vec<Product>> {
        let query = ObjectQuery::new(ContentType::Products)
            .filter("metadata.collection", collection_id.as_str())
            .props(PRODUCT_PROPS)
            .depth(RELATION_DEPTH);
        self.many(&query).await
    }

    /// Fetch all products, optionally capped at `limit`.
    #[instrument(skip(self))]
    pub async fn products(&self, limit: Option<u32>) -> Fetched<Vec<Product>> {
        let mut query = ObjectQuery::new(ContentType::Products)
            .props(PRODUCT_PROPS)
            .depth(RELATION_DEPTH);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        self.many(&query).await
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    /// Fetch the reviews of a product.
    #[instrument(skip(self, product_id), fields(product_id = %product_id))]
    pub async fn reviews_for_product(&self, product_id: &ProductId) -> Fetched<Vec<Review>> {
        let query = ObjectQuery::new(ContentType::Reviews)
            .filter("metadata.product", product_id.as_str())
            .props(OBJECT_PROPS)
            .depth(RELATION_DEPTH);
        self.many(&query).await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Run a single-object query.
    async fn one<T: DeserializeOwned>(&self, query: &ObjectQuery) -> Fetched<T> {
        let page = match self.source.find(query).await {
            Ok(page) => page,
            Err(e) => return absorb(query, e, Fetched::NotFound),
        };

        let Some(object) = page.objects.into_iter().next() else {
            return Fetched::NotFound;
        };

        match serde_json::from_value(object) {
            Ok(value) => Fetched::Found(value),
            Err(e) => {
                tracing::error!(query = %query.describe(), error = %e, "Malformed content object");
                Fetched::Failed(FetchFailure::Malformed(e.to_string()))
            }
        }
    }

    /// Run a list query. Objects that fail to deserialize are skipped.
    async fn many<T: DeserializeOwned>(&self, query: &ObjectQuery) -> Fetched<Vec<T>> {
        let page = match self.source.find(query).await {
            Ok(page) => page,
            Err(e) => return absorb(query, e, Fetched::Empty),
        };

        let items = page
            .objects
            .into_iter()
            .filter_map(|object| {
                serde_json::from_value(object)
                    .map_err(|e| {
                        tracing::warn!(
                            query = %query.describe(),
                            error = %e,
                            "Skipping malformed content object"
                        );
                    })
                    .ok()
            })
            .collect();

        Fetched::from_items(items)
    }
}

/// Turn a source error into an outcome. "Nothing matched" maps to `absent`,
/// everything else is logged and becomes `Failed`.
fn absorb<T>(query: &ObjectQuery, err: CosmicError, absent: Fetched<T>) -> Fetched<T> {
    if matches!(err, CosmicError::NotFound(_)) {
        return absent;
    }
    tracing::error!(query = %query.describe(), error = %err, "Failed to fetch content");
    Fetched::Failed(FetchFailure::from(err))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::cosmic::ObjectPage;

    /// Records queries and replays a canned answer.
    struct Scripted {
        answer: fn() -> Result<ObjectPage, CosmicError>,
        seen: Mutex<Vec<ObjectQuery>>,
    }

    impl Scripted {
        fn catalog(answer: fn() -> Result<ObjectPage, CosmicError>) -> (Catalog, Arc<Self>) {
            let source = Arc::new(Self {
                answer,
                seen: Mutex::new(Vec::new()),
            });
            (Catalog::new(source.clone()), source)
        }

        fn last_query(&self) -> ObjectQuery {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl ContentSource for Scripted {
        async fn find(&self, query: &ObjectQuery) -> Result<ObjectPage, CosmicError> {
            self.seen.lock().unwrap().push(query.clone());
            (self.answer)()
        }
    }

    fn page(objects: Vec<serde_json::Value>) -> Result<ObjectPage, CosmicError> {
        let total = objects.len() as u64;
        Ok(ObjectPage { objects, total })
    }

    fn one_product() -> Result<ObjectPage, CosmicError> {
        page(vec![json!({
            "id": "p1",
            "slug": "classic-tee",
            "title": "Classic Tee",
            "metadata": {"price": 25, "in_stock": true}
        })])
    }

    fn not_found() -> Result<ObjectPage, CosmicError> {
        Err(CosmicError::NotFound("nothing".to_string()))
    }

    fn server_error() -> Result<ObjectPage, CosmicError> {
        Err(CosmicError::Api {
            status: 500,
            message: "boom".to_string(),
        })
    }

    fn no_objects() -> Result<ObjectPage, CosmicError> {
        page(Vec::new())
    }

    fn mixed_reviews() -> Result<ObjectPage, CosmicError> {
        page(vec![
            json!({"id": "r1", "slug": "good", "metadata": {"rating": {"key": "4"}}}),
            json!({"title": "no id or slug"}),
        ])
    }

    #[tokio::test]
    async fn test_product_by_slug_found() {
        let (catalog, source) = Scripted::catalog(one_product);
        let slug = Slug::parse("classic-tee").unwrap();

        let product = catalog.product_by_slug(&slug).await.found().unwrap();
        assert_eq!(product.name(), "Classic Tee");

        let query = source.last_query();
        assert_eq!(query.content_type, ContentType::Products);
        assert_eq!(query.filters, vec![("slug".to_string(), "classic-tee".to_string())]);
        assert_eq!(query.props, PRODUCT_PROPS);
        assert_eq!(query.depth, 1);
        assert_eq!(query.limit, Some(1));
    }

    #[tokio::test]
    async fn test_product_by_slug_not_found() {
        let (catalog, _) = Scripted::catalog(not_found);
        let slug = Slug::parse("nope").unwrap();
        assert_eq!(catalog.product_by_slug(&slug).await, Fetched::NotFound);
    }

    #[tokio::test]
    async fn test_empty_page_is_not_found_for_single_lookup() {
        let (catalog, _) = Scripted::catalog(no_objects);
        let slug = Slug::parse("summer").unwrap();
        assert_eq!(catalog.collection_by_slug(&slug).await, Fetched::NotFound);
    }

    #[tokio::test]
    async fn test_single_lookup_failure_is_tagged() {
        let (catalog, _) = Scripted::catalog(server_error);
        let slug = Slug::parse("summer").unwrap();
        assert_eq!(
            catalog.collection_by_slug(&slug).await,
            Fetched::Failed(FetchFailure::Upstream { status: 500 })
        );
    }

    #[tokio::test]
    async fn test_list_not_found_is_empty() {
        let (catalog, _) = Scripted::catalog(not_found);
        let fetched = catalog
            .products_in_collection(&CollectionId::new("c1"))
            .await;
        assert_eq!(fetched, Fetched::Empty);
    }

    #[tokio::test]
    async fn test_list_failure_degrades_to_no_items() {
        let (catalog, _) = Scripted::catalog(server_error);
        let fetched = catalog.collections().await;
        assert!(fetched.failure().is_some());
        assert!(fetched.into_items().is_empty());
    }

    #[tokio::test]
    async fn test_products_limit_is_passed_through() {
        let (catalog, source) = Scripted::catalog(one_product);

        catalog.products(Some(8)).await;
        assert_eq!(source.last_query().limit, Some(8));

        catalog.products(None).await;
        assert_eq!(source.last_query().limit, None);
    }

    #[tokio::test]
    async fn test_reviews_filter_by_product_and_skip_malformed() {
        let (catalog, source) = Scripted::catalog(mixed_reviews);

        let reviews = catalog
            .reviews_for_product(&ProductId::new("p1"))
            .await
            .into_items();
        assert_eq!(reviews.len(), 1);

        let query = source.last_query();
        assert_eq!(query.content_type, ContentType::Reviews);
        assert_eq!(
            query.filters,
            vec![("metadata.product".to_string(), "p1".to_string())]
        );
    }
}
