//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;
use crate::views::rules::list_region;
use crate::views::{CollectionView, ListRegion, ProductCard, product_cards};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// First few products in the catalog.
    pub featured: Vec<ProductCard>,
    pub featured_region: ListRegion,
    /// All collections.
    pub collections: Vec<CollectionView>,
    pub collections_region: ListRegion,
}

/// Display the home page.
///
/// Products and collections are fetched concurrently. Either one failing
/// or coming back empty shows that section's empty state.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();
    let (products, collections) = tokio::join!(
        catalog.products(Some(state.config().featured_limit)),
        catalog.collections(),
    );

    let featured = product_cards(&products.into_items());
    let collections: Vec<CollectionView> = collections
        .into_items()
        .iter()
        .map(CollectionView::card)
        .collect();

    HomeTemplate {
        featured_region: list_region(&featured),
        featured,
        collections_region: list_region(&collections),
        collections,
    }
}
