//! Cosmic Shop storefront - public catalog site.
//!
//! # Architecture
//!
//! - Axum web framework, no client-side scripting
//! - Askama templates for server-side rendering
//! - Cosmic objects REST API for products, collections and reviews
//! - No local storage and no cache: every page load reads the CMS

#![cfg_attr(not(test), forbid(unsafe_code))]

use cosmic_shop_storefront::{app, config::StorefrontConfig, observability, state::AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    // Sentry needs the DSN before any tracing output
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");
    let _observability = observability::init(&config);

    tracing::info!(
        bucket = %config.cosmic.bucket_slug,
        api_url = %config.cosmic.api_url,
        featured_limit = config.featured_limit,
        "Using Cosmic bucket"
    );

    let addr = config.socket_addr();
    let state = AppState::new(config).expect("Failed to build Cosmic client");

    // Outermost so every request gets a Sentry hub and transaction
    let app = app(state)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Storefront listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Resolve on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
        tokio::select! {
            result = tokio::signal::ctrl_c() => result.expect("Failed to install Ctrl+C handler"),
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");

    tracing::info!("Shutdown signal received, draining connections");
}
