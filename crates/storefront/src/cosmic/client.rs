//! Cosmic REST client.
//!
//! Issues `GET {api_url}/buckets/{bucket}/objects` with the query, props,
//! depth, limit and read key as URL parameters.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};
use url::Url;

use super::{ContentSource, CosmicError, ObjectPage, ObjectQuery};
use crate::config::CosmicConfig;

/// How much of an error body to keep in logs and error messages.
const ERROR_BODY_PREVIEW: usize = 200;

/// Client for the Cosmic objects API.
#[derive(Clone)]
pub struct CosmicClient {
    inner: Arc<CosmicClientInner>,
}

struct CosmicClientInner {
    client: reqwest::Client,
    objects_url: Url,
    read_key: SecretString,
}

impl CosmicClient {
    /// Create a new Cosmic API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is invalid or the HTTP client fails
    /// to build.
    pub fn new(config: &CosmicConfig) -> Result<Self, CosmicError> {
        let objects_url = Url::parse(&format!(
            "{}/buckets/{}/objects",
            config.api_url.trim_end_matches('/'),
            config.bucket_slug
        ))?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("cosmic-shop/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(CosmicClientInner {
                client,
                objects_url,
                read_key: config.read_key.clone(),
            }),
        })
    }

    /// Build the request URL for a query. The read key is appended last.
    fn request_url(&self, query: &ObjectQuery) -> Url {
        let mut url = self.inner.objects_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", &query.query_json().to_string());
            if !query.props.is_empty() {
                pairs.append_pair("props", &query.props.join(","));
            }
            pairs.append_pair("depth", &query.depth.to_string());
            if let Some(limit) = query.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            pairs.append_pair("read_key", self.inner.read_key.expose_secret());
        }
        url
    }
}

#[async_trait]
impl ContentSource for CosmicClient {
    // The URL carries the read key, so it is never logged.
    #[instrument(skip(self, query), fields(query = %query.describe()))]
    async fn find(&self, query: &ObjectQuery) -> Result<ObjectPage, CosmicError> {
        let response = self
            .inner
            .client
            .get(self.request_url(query))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Cosmic answers 404 when no object matches
        if status == StatusCode::NOT_FOUND {
            debug!("No objects matched");
            return Err(CosmicError::NotFound(query.describe()));
        }

        if !status.is_success() {
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
            tracing::error!(
                status = %status,
                body = %preview,
                "Cosmic API returned non-success status"
            );
            return Err(CosmicError::Api {
                status: status.as_u16(),
                message: preview,
            });
        }

        let page: ObjectPage = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(ERROR_BODY_PREVIEW).collect::<String>(),
                "Failed to parse Cosmic response"
            );
            CosmicError::Parse(e)
        })?;

        debug!(returned = page.objects.len(), total = page.total, "Cosmic query complete");
        Ok(page)
    }
}
