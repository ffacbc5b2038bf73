//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                     - Home page (featured products, collections)
//! GET  /health               - Health check
//!
//! # Catalog
//! GET  /products             - Product listing
//! GET  /products/{slug}      - Product detail with reviews
//! GET  /collections          - Collection listing
//! GET  /collections/{slug}   - Collection detail with its products
//!
//! # Assets
//! GET  /static/*             - Stylesheets (served by `ServeDir`)
//! ```
//!
//! Anything else renders the not-found page.

pub mod collections;
pub mod home;
pub mod products;

use axum::{Router, routing::get};
use cosmic_shop_core::Slug;

use crate::catalog::Fetched;
use crate::error::AppError;
use crate::state::AppState;

/// Create the page router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/products", get(products::index))
        .route("/products/{slug}", get(products::show))
        .route("/collections", get(collections::index))
        .route("/collections/{slug}", get(collections::show))
}

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound("route".to_string())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not call the CMS.
pub async fn health() -> &'static str {
    "ok"
}

/// Parse a slug from the path. A slug that could never match renders as
/// not found.
fn parse_slug(raw: &str, kind: &str) -> Result<Slug, AppError> {
    Slug::parse(raw).map_err(|e| AppError::NotFound(format!("{kind} {raw:?}: {e}")))
}

/// Unwrap the primary resource of a detail page.
///
/// Both a missing and an unreachable resource become the not-found page;
/// the failure itself was already logged by the catalog.
fn require<T>(fetched: Fetched<T>, kind: &str, slug: &Slug) -> Result<T, AppError> {
    match fetched {
        Fetched::Found(value) => Ok(value),
        Fetched::NotFound | Fetched::Empty => Err(AppError::NotFound(format!("{kind} {slug}"))),
        Fetched::Failed(failure) => Err(AppError::NotFound(format!(
            "{kind} {slug} (unavailable: {failure})"
        ))),
    }
}
