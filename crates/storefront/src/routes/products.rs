//! Product route handlers.

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
use crate::views::{ListRegion, ProductCard, ProductDetail, ReviewsView, product_cards};

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductCard>,
    pub region: ListRegion,
    pub count_label: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetail,
    pub reviews: ReviewsView,
}

/// Display the product listing page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let products = product_cards(&state.catalog().products(None).await.into_items());

    ProductsIndexTemplate {
        region: list_region(&products),
        count_label: pluralize(products.len(), "product"),
        products,
    }
}

/// Display a product with its reviews.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ProductShowTemplate> {
    let slug = parse_slug(&slug, "product")?;
    let product = require(state.catalog().product_by_slug(&slug).await, "product", &slug)?;

    add_breadcrumb(
        "navigation",
        "Viewed product page",
        Some(&[("product_slug", slug.as_str())]),
    );

    // Reviews need the product ID, so this cannot overlap the lookup above
    let reviews = state
        .catalog()
        .reviews_for_product(&product.id)
        .await
        .into_items();

    Ok(ProductShowTemplate {
        product: ProductDetail::from(&product),
        reviews: ReviewsView::new(&reviews),
    })
}
