//! Cosmic Shop storefront library.
//!
//! Server-rendered catalog pages over the Cosmic headless CMS. The binary in
//! `main.rs` only loads configuration, initializes observability and serves
//! [`app`]; everything else lives here so it can be exercised in tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod cosmic;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod state;
pub mod views;

use axum::{Router, body::Body, http::Request, middleware::from_fn, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Build the application router with its middleware stack.
///
/// Sentry layers are added by the binary, outside this stack.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/health", get(routes::health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(routes::not_found)
        .layer(from_fn(middleware::security_headers_middleware))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}
