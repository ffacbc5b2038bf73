//! Integration test harness for Cosmic Shop.
//!
//! Pages are exercised end to end through the real router, with the Cosmic
//! API replaced by [`FakeSource`], an in-memory bucket that answers
//! [`ObjectQuery`]s the way the objects endpoint does: type and equality
//! filters, relation fields matching either a bare ID or an expanded object's
//! `id`, a row limit, and "not found" when nothing matches.
//!
//! ```rust,ignore
//! let source = FakeSource::new().with(ContentType::Products, product("classic-tee", json!({})));
//! let (status, html) = get(&app_with(source), "/products/classic-tee").await;
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, http::StatusCode, response::Response};
use cosmic_shop_storefront::config::{CosmicConfig, StorefrontConfig};
use cosmic_shop_storefront::cosmic::{
    ContentSource, ContentType, CosmicError, ObjectPage, ObjectQuery,
};
use cosmic_shop_storefront::state::AppState;
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;

// =============================================================================
// Fake content source
// =============================================================================

/// In-memory stand-in for a Cosmic bucket.
#[derive(Debug, Default)]
pub struct FakeSource {
    objects: Vec<(ContentType, Value)>,
    failing: bool,
}

impl FakeSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every query fails with a 503.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            objects: Vec::new(),
            failing: true,
        }
    }

    /// Add an object of the given type.
    #[must_use]
    pub fn with(mut self, content_type: ContentType, object: Value) -> Self {
        self.objects.push((content_type, object));
        self
    }
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn find(&self, query: &ObjectQuery) -> Result<ObjectPage, CosmicError> {
        if self.failing {
            return Err(CosmicError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }

        let matches: Vec<Value> = self
            .objects
            .iter()
            .filter(|(content_type, _)| *content_type == query.content_type)
            .filter(|(_, object)| {
                query
                    .filters
                    .iter()
                    .all(|(path, expected)| field_matches(object, path, expected))
            })
            .map(|(_, object)| object.clone())
            .collect();

        if matches.is_empty() {
            return Err(CosmicError::NotFound(query.describe()));
        }

        let total = matches.len() as u64;
        let limit = query.limit.map_or(usize::MAX, |l| l as usize);
        Ok(ObjectPage {
            objects: matches.into_iter().take(limit).collect(),
            total,
        })
    }
}

/// Follow a dotted path and compare with `expected`. A relation matches on
/// its `id` when it has been expanded into an object.
fn field_matches(object: &Value, path: &str, expected: &str) -> bool {
    let found = path
        .split('.')
        .try_fold(object, |value, key| value.get(key));

    match found {
        Some(Value::String(s)) => s == expected,
        Some(Value::Object(map)) => map.get("id").and_then(Value::as_str) == Some(expected),
        _ => false,
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// A product object with the given metadata.
#[must_use]
pub fn product(slug: &str, metadata: Value) -> Value {
    json!({
        "id": format!("prod-{slug}"),
        "slug": slug,
        "title": slug,
        "thumbnail": format!("https://imgix.cosmicjs.com/{slug}.jpg"),
        "metadata": metadata,
    })
}

/// A collection object.
#[must_use]
pub fn collection(slug: &str, name: &str) -> Value {
    json!({
        "id": format!("coll-{slug}"),
        "slug": slug,
        "title": name,
        "metadata": {
            "name": name,
            "description": format!("All about {name}"),
            "featured_image": {
                "url": format!("https://cdn.cosmicjs.com/{slug}.jpg"),
                "imgix_url": format!("https://imgix.cosmicjs.com/{slug}.jpg"),
            },
        },
    })
}

/// A review of `product_id` with a select-dropdown rating key.
#[must_use]
pub fn review(product_id: &str, n: u32, rating_key: &str, verified: bool) -> Value {
    json!({
        "id": format!("rev-{product_id}-{n}"),
        "slug": format!("review-{n}"),
        "title": format!("Review number {n}"),
        "metadata": {
            "product": product_id,
            "customer_name": format!("Customer {n}"),
            "rating": {"key": rating_key, "value": format!("{rating_key} Stars")},
            "review_text": "Would buy again.",
            "verified_purchase": verified,
        },
    })
}

/// Configuration for tests; nothing in it is contacted.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cosmic: CosmicConfig {
            api_url: "https://api.cosmicjs.com/v3".to_string(),
            bucket_slug: "test-bucket".to_string(),
            read_key: SecretString::from("kT9#vQ2!mZ7@pL4$"),
        },
        featured_limit: 8,
        static_dir: PathBuf::from("static"),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Build the storefront router over a fake source.
#[must_use]
pub fn app_with(source: FakeSource) -> Router {
    app_with_config(test_config(), source)
}

#[must_use]
pub fn app_with_config(config: StorefrontConfig, source: FakeSource) -> Router {
    cosmic_shop_storefront::app(AppState::from_parts(config, Arc::new(source)))
}

/// Send a GET request and return the raw response.
pub async fn send(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a GET request and return the status and body text.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = send(app, uri).await;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_matches_string_and_expanded_relation() {
        let object = json!({
            "slug": "tee",
            "metadata": {"product": "p1", "collection": {"id": "c1", "slug": "basics"}}
        });
        assert!(field_matches(&object, "slug", "tee"));
        assert!(field_matches(&object, "metadata.product", "p1"));
        assert!(field_matches(&object, "metadata.collection", "c1"));
        assert!(!field_matches(&object, "metadata.collection", "c2"));
        assert!(!field_matches(&object, "metadata.missing", "x"));
    }

    #[tokio::test]
    async fn test_fake_source_limit_and_not_found() {
        let source = FakeSource::new()
            .with(ContentType::Products, product("a", json!({})))
            .with(ContentType::Products, product("b", json!({})));

        let page = source
            .find(&ObjectQuery::new(ContentType::Products).limit(1))
            .await
            .unwrap();
        assert_eq!(page.objects.len(), 1);
        assert_eq!(page.total, 2);

        let missing = source
            .find(&ObjectQuery::new(ContentType::Reviews))
            .await;
        assert!(matches!(missing, Err(CosmicError::NotFound(_))));
    }
}
