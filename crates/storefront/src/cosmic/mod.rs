//! Cosmic headless-CMS content API adapter.
//!
//! # Architecture
//!
//! - [`ContentSource`] is the seam between the storefront and the CMS. The
//!   production implementation is [`CosmicClient`], a thin `reqwest` wrapper
//!   over the REST objects endpoint.
//! - Queries are described by [`ObjectQuery`]: content type, equality
//!   filters, props projection, relation depth, and an optional row limit.
//! - Responses come back as raw JSON objects ([`ObjectPage`]); typed entities
//!   ([`types`]) are deserialized by the catalog, which is the ingestion
//!   boundary.
//! - No caching: every request goes to the API.
//!
//! # Example
//!
//! ```rust,ignore
//! use cosmic_shop_storefront::cosmic::{ContentSource, ContentType, CosmicClient, ObjectQuery};
//!
//! let client = CosmicClient::new(&config.cosmic)?;
//!
//! let query = ObjectQuery::new(ContentType::Products)
//!     .filter("slug", "classic-tee")
//!     .props(&["id", "title", "slug", "metadata"])
//!     .depth(1)
//!     .limit(1);
//! let page = client.find(&query).await?;
//! ```

mod client;
pub mod types;

pub use client::CosmicClient;
pub use types::*;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the Cosmic API.
#[derive(Debug, Error)]
pub enum CosmicError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// No object matched the query.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The configured API URL is unusable.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// A named category of CMS-managed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Products,
    Collections,
    Reviews,
}

impl ContentType {
    /// The Cosmic object type slug.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Collections => "collections",
            Self::Reviews => "reviews",
        }
    }
}

/// Description of an objects query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectQuery {
    /// Content type to search.
    pub content_type: ContentType,
    /// Equality filters as `(field path, value)`, e.g. `("metadata.product", id)`.
    pub filters: Vec<(String, String)>,
    /// Top-level props to return. Empty means everything.
    pub props: &'static [&'static str],
    /// How many levels of object relations to expand inline.
    pub depth: u8,
    /// Maximum number of objects to return.
    pub limit: Option<u32>,
}

impl ObjectQuery {
    /// Start a query over a content type.
    #[must_use]
    pub const fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            filters: Vec::new(),
            props: &[],
            depth: 0,
            limit: None,
        }
    }

    /// Add an equality filter.
    #[must_use]
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    /// Restrict the returned props.
    #[must_use]
    pub fn props(mut self, props: &'static [&'static str]) -> Self {
        self.props = props;
        self
    }

    /// Set the relation-expansion depth.
    #[must_use]
    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// Cap the number of returned objects.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The Cosmic `query` parameter: `{"type": ..., <filters>}`.
    #[must_use]
    pub fn query_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(
            "type".to_string(),
            serde_json::Value::String(self.content_type.as_str().to_string()),
        );
        for (field, value) in &self.filters {
            map.insert(field.clone(), serde_json::Value::String(value.clone()));
        }
        serde_json::Value::Object(map)
    }

    /// Short human-readable description for logs and error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = self.content_type.as_str().to_string();
        for (field, value) in &self.filters {
            out.push_str(&format!(" {field}={value}"));
        }
        out
    }
}

/// One page of raw objects returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ObjectPage {
    /// Matching objects, untyped.
    #[serde(default)]
    pub objects: Vec<serde_json::Value>,
    /// Total matches on the server (may exceed `objects.len()` when limited).
    #[serde(default)]
    pub total: u64,
}

/// Anything that can answer an [`ObjectQuery`].
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Run a query.
    ///
    /// # Errors
    ///
    /// Returns [`CosmicError::NotFound`] when nothing matched, and the other
    /// variants for transport, status, or payload failures.
    async fn find(&self, query: &ObjectQuery) -> Result<ObjectPage, CosmicError>;
}
