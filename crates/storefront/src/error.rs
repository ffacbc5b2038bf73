//! Unified error handling with Sentry integration.
//!
//! Catalog fetches never fail a request on their own; the only error a page
//! handler raises is a missing primary resource. Handlers return
//! `Result<T, AppError>`.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::filters;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The page's primary resource does not exist (or could not be loaded).
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Not-found page.
#[derive(Template)]
#[template(path = "errors/not_found.html")]
pub struct NotFoundTemplate;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Self::NotFound(what) = self;
        tracing::info!(resource = %what, "Rendering not-found page");
        match NotFoundTemplate.render() {
            Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
            Err(e) => {
                let event_id = sentry::capture_error(&e);
                tracing::error!(
                    error = %e,
                    sentry_event_id = %event_id,
                    "Failed to render not-found page"
                );
                (StatusCode::NOT_FOUND, "Not found").into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("navigation", "Viewed product page", Some(&[("product_slug", "classic-tee")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product classic-tee".to_string());
        assert_eq!(err.to_string(), "Not found: product classic-tee");
    }

    #[test]
    fn test_not_found_status_code() {
        let response = AppError::NotFound("test".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_found_page_renders() {
        let html = NotFoundTemplate.render().unwrap();
        assert!(html.contains("Page not found"));
        assert!(html.contains("href=\"/products\""));
    }
}
