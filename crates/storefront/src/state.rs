//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::cosmic::{ContentSource, CosmicClient, CosmicError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and holds only immutable data:
/// configuration and the catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
}

impl AppState {
    /// Create application state backed by the Cosmic API.
    ///
    /// # Errors
    ///
    /// Returns an error if the Cosmic client cannot be built from the
    /// configuration.
    pub fn new(config: StorefrontConfig) -> Result<Self, CosmicError> {
        let client = CosmicClient::new(&config.cosmic)?;
        Ok(Self::from_parts(config, Arc::new(client)))
    }

    /// Create application state over any content source.
    #[must_use]
    pub fn from_parts(config: StorefrontConfig, source: Arc<dyn ContentSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::new(source),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}
