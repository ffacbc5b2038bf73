//! Collection route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use cosmic_shop_core::text::pluralize;
use tracing::instrument;

use super::{parse_slug, require};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;
use crate::views::rules::list_region;
use crate::views::{CollectionView, ListRegion, ProductCard, product_cards};

/// Collection listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/index.html")]
pub struct CollectionsIndexTemplate {
    pub collections: Vec<CollectionView>,
    pub region: ListRegion,
}

/// Collection detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/show.html")]
pub struct CollectionShowTemplate {
    pub collection: CollectionView,
    pub products: Vec<ProductCard>,
    pub region: ListRegion,
    /// e.g. "3 products".
    pub count_label: String,
}

/// Display the collection listing page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let collections: Vec<CollectionView> = state
        .catalog()
        .collections()
        .await
        .into_items()
        .iter()
        .map(CollectionView::card)
        .collect();

    CollectionsIndexTemplate {
        region: list_region(&collections),
        collections,
    }
}

/// Display a collection with its products.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<CollectionShowTemplate> {
    let slug = parse_slug(&slug, "collection")?;
    let collection = require(
        state.catalog().collection_by_slug(&slug).await,
        "collection",
        &slug,
    )?;

    add_breadcrumb(
        "navigation",
        "Viewed collection page",
        Some(&[("collection_slug", slug.as_str())]),
    );

    let products = product_cards(
        &state
            .catalog()
            .products_in_collection(&collection.id)
            .await
            .into_items(),
    );

    Ok(CollectionShowTemplate {
        collection: CollectionView::header(&collection),
        region: list_region(&products),
        count_label: pluralize(products.len(), "product"),
        products,
    })
}
