//! View models for the page templates.
//!
//! Mapping from CMS entities to template data lives here. Nothing in this
//! module performs I/O; each page handler fetches through the catalog and
//! hands the results to these constructors.

mod image;
pub mod rules;

pub use image::{ImagePreset, ImageView, transform_url};
pub use rules::{CartButton, CollectionLink, ListRegion};

use cosmic_shop_core::text::pluralize;
use cosmic_shop_core::{MAX_STARS, Price, PriceDisplay, RatingSummary, StockStatus};

use crate::cosmic::{Collection, Product, Review, rating_summary};

// =============================================================================
// Shared fragments
// =============================================================================

/// Formatted prices for a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceView {
    /// The price the customer pays.
    pub current: String,
    /// Struck-through list price, only when discounted.
    pub original: Option<String>,
    /// Discount amount, only when discounted.
    pub savings: Option<String>,
}

impl From<PriceDisplay> for PriceView {
    fn from(display: PriceDisplay) -> Self {
        Self {
            current: display.current().display(),
            original: display.original().as_ref().map(Price::display),
            savings: display.savings().as_ref().map(Price::display),
        }
    }
}

impl PriceView {
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        PriceDisplay::from_prices(product.price(), product.sale_price()).into()
    }
}

/// Stock badge text and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockBadge {
    pub label: &'static str,
    pub class: &'static str,
    pub available: bool,
}

impl From<StockStatus> for StockBadge {
    fn from(status: StockStatus) -> Self {
        Self {
            label: status.label(),
            class: status.badge_class(),
            available: status.is_available(),
        }
    }
}

/// A row of five stars, the first `filled` of them highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRow {
    pub filled: u8,
    /// One CSS class per star, in order.
    pub classes: Vec<&'static str>,
}

impl StarRow {
    #[must_use]
    pub fn new(filled: u8) -> Self {
        let filled = filled.min(MAX_STARS);
        let classes = (1..=MAX_STARS)
            .map(|star| if star <= filled { "star-filled" } else { "star-empty" })
            .collect();
        Self { filled, classes }
    }
}

/// Aggregate rating shown next to the product title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingView {
    pub stars: StarRow,
    /// e.g. "2 reviews".
    pub count_label: String,
}

impl From<RatingSummary> for RatingView {
    fn from(summary: RatingSummary) -> Self {
        Self {
            stars: StarRow::new(summary.rounded_stars()),
            count_label: pluralize(summary.count, "review"),
        }
    }
}

// =============================================================================
// Products
// =============================================================================

/// A product tile on listing pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub slug: String,
    pub name: String,
    pub image: Option<ImageView>,
    pub price: PriceView,
    pub stock: StockBadge,
    /// Owning collection's name, when expanded.
    pub collection_name: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let name = product.name().to_string();
        Self {
            slug: product.slug.clone(),
            image: ImageView::new(primary_image(product), ImagePreset::ProductCard, &name),
            price: PriceView::for_product(product),
            stock: product.stock().into(),
            collection_name: product.collection().map(|c| c.name().to_string()),
            name,
        }
    }
}

/// Map a product list into cards.
#[must_use]
pub fn product_cards(products: &[Product]) -> Vec<ProductCard> {
    products.iter().map(ProductCard::from).collect()
}

/// Everything the product detail page shows about the product itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub slug: String,
    pub name: String,
    /// CMS rich text, rendered unescaped.
    pub description_html: String,
    pub hero: Option<ImageView>,
    pub thumbnails: Vec<ImageView>,
    pub breadcrumb: Option<CollectionLink>,
    pub sku: Option<String>,
    pub price: PriceView,
    pub stock: StockBadge,
    pub cart: CartButton,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        let name = product.name().to_string();
        let thumbnails = rules::gallery_thumbnails(&product.metadata.images)
            .iter()
            .enumerate()
            .filter_map(|(i, image)| {
                ImageView::from_cosmic(
                    image,
                    ImagePreset::GalleryThumbnail,
                    &format!("{name} {}", i + 1),
                )
            })
            .collect();

        Self {
            slug: product.slug.clone(),
            description_html: product.metadata.description.clone(),
            hero: ImageView::new(primary_image(product), ImagePreset::ProductHero, &name),
            thumbnails,
            breadcrumb: rules::breadcrumb(product),
            sku: rules::sku_line(product),
            price: PriceView::for_product(product),
            stock: product.stock().into(),
            cart: rules::cart_button(product.stock()),
            name,
        }
    }
}

/// The thumbnail, or the first gallery image when no thumbnail was set.
fn primary_image(product: &Product) -> &str {
    let thumbnail = product.thumbnail.trim();
    if !thumbnail.is_empty() {
        return thumbnail;
    }
    product
        .metadata
        .images
        .first()
        .map_or("", |image| image.transform_base())
}

// =============================================================================
// Reviews
// =============================================================================

/// A single review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewView {
    pub customer_name: String,
    pub title: String,
    pub text: String,
    pub verified: bool,
    pub stars: StarRow,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            customer_name: review.metadata.customer_name.clone(),
            title: review.title.clone(),
            text: review.metadata.review_text.clone(),
            verified: review.metadata.verified_purchase,
            stars: StarRow::new(review.stars()),
        }
    }
}

/// Reviews plus their aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewsView {
    pub rating: RatingView,
    pub items: Vec<ReviewView>,
    pub region: ListRegion,
}

impl ReviewsView {
    #[must_use]
    pub fn new(reviews: &[Review]) -> Self {
        Self {
            rating: rating_summary(reviews).into(),
            items: reviews.iter().map(ReviewView::from).collect(),
            region: rules::list_region(reviews),
        }
    }

    /// Message shown when there is nothing to list.
    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        rules::NO_REVIEWS_MESSAGE
    }
}

// =============================================================================
// Collections
// =============================================================================

/// Collection display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionView {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub image: Option<ImageView>,
}

impl CollectionView {
    /// Collection page header, with the wide banner image.
    #[must_use]
    pub fn header(collection: &Collection) -> Self {
        Self::with_preset(collection, ImagePreset::CollectionBanner)
    }

    /// Tile on the collections listing.
    #[must_use]
    pub fn card(collection: &Collection) -> Self {
        Self::with_preset(collection, ImagePreset::CollectionCard)
    }

    fn with_preset(collection: &Collection, preset: ImagePreset) -> Self {
        let name = collection.name().to_string();
        Self {
            slug: collection.slug.clone(),
            description: collection.metadata.description.clone(),
            image: collection
                .metadata
                .featured_image
                .as_ref()
                .and_then(|image| ImageView::from_cosmic(image, preset, &name)),
            name,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn product(metadata: serde_json::Value) -> Product {
        serde_json::from_value(json!({
            "id": "p1",
            "slug": "classic-tee",
            "title": "Classic Tee",
            "thumbnail": "https://imgix.cosmicjs.com/tee.jpg",
            "metadata": metadata
        }))
        .unwrap()
    }

    fn review(rating: &str, verified: bool) -> Review {
        serde_json::from_value(json!({
            "id": format!("r-{rating}"),
            "slug": format!("review-{rating}"),
            "title": "Great",
            "metadata": {
                "customer_name": "Sam",
                "rating": {"key": rating, "value": format!("{rating} Stars")},
                "review_text": "Fits well.",
                "verified_purchase": verified
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_price_view_discounted() {
        let view = PriceView::for_product(&product(json!({"price": 100, "sale_price": 80})));
        assert_eq!(view.current, "$80");
        assert_eq!(view.original.as_deref(), Some("$100"));
        assert_eq!(view.savings.as_deref(), Some("$20"));
    }

    #[test]
    fn test_price_view_regular_when_sale_not_lower() {
        let view = PriceView::for_product(&product(json!({"price": 50, "sale_price": 60})));
        assert_eq!(view.current, "$50");
        assert!(view.original.is_none());
        assert!(view.savings.is_none());
    }

    #[test]
    fn test_star_row() {
        let row = StarRow::new(4);
        assert_eq!(
            row.classes,
            vec!["star-filled", "star-filled", "star-filled", "star-filled", "star-empty"]
        );
        assert_eq!(StarRow::new(9).filled, 5);
    }

    #[test]
    fn test_reviews_view_aggregates() {
        let view = ReviewsView::new(&[review("5", true), review("3", false)]);
        assert_eq!(view.rating.stars.filled, 4);
        assert_eq!(view.rating.count_label, "2 reviews");
        assert!(view.region.is_grid());
        assert!(view.items.first().unwrap().verified);
    }

    #[test]
    fn test_reviews_view_invalid_rating_counts_as_zero() {
        let view = ReviewsView::new(&[review("5", false), review("great", false)]);
        assert_eq!(view.rating.stars.filled, 3);
        assert_eq!(view.rating.count_label, "2 reviews");
    }

    #[test]
    fn test_reviews_view_empty() {
        let view = ReviewsView::new(&[]);
        assert_eq!(view.rating.stars.filled, 0);
        assert_eq!(view.rating.count_label, "0 reviews");
        assert_eq!(view.region, ListRegion::EmptyState);
        assert_eq!(
            view.empty_message(),
            "No reviews yet. Be the first to review this product!"
        );
    }

    #[test]
    fn test_product_card() {
        let card = ProductCard::from(&product(json!({
            "name": "Classic Tee",
            "price": 25,
            "in_stock": false,
            "collection": {"id": "c1", "slug": "basics", "metadata": {"name": "Basics"}}
        })));
        assert_eq!(card.slug, "classic-tee");
        assert_eq!(card.stock.label, "Out of Stock");
        assert_eq!(card.collection_name.as_deref(), Some("Basics"));
        assert!(card.image.unwrap().url.contains("w=600&h=400"));
    }

    #[test]
    fn test_product_detail_gallery_and_cart() {
        let images: Vec<_> = (1..=5)
            .map(|i| json!({"url": format!("https://cdn.cosmicjs.com/{i}.jpg"), "imgix_url": format!("https://imgix.cosmicjs.com/{i}.jpg")}))
            .collect();
        let detail = ProductDetail::from(&product(json!({
            "name": "Classic Tee",
            "price": 25,
            "in_stock": true,
            "images": images
        })));

        assert_eq!(detail.thumbnails.len(), 4);
        assert_eq!(detail.thumbnails.first().unwrap().alt, "Classic Tee 1");
        assert!(detail.hero.unwrap().url.contains("w=800&h=800"));
        assert!(detail.cart.enabled);
        assert!(detail.breadcrumb.is_none());
        assert!(detail.sku.is_none());
    }

    #[test]
    fn test_collection_view_presets() {
        let collection: Collection = serde_json::from_value(json!({
            "id": "c1",
            "slug": "summer",
            "title": "Summer",
            "metadata": {
                "name": "Summer Sale",
                "description": "Hot deals",
                "featured_image": {"url": "", "imgix_url": "https://imgix.cosmicjs.com/s.jpg"}
            }
        }))
        .unwrap();

        let header = CollectionView::header(&collection);
        assert_eq!(header.name, "Summer Sale");
        assert!(header.image.unwrap().url.contains("w=1200&h=400"));

        let card = CollectionView::card(&collection);
        assert!(card.image.unwrap().url.contains("w=600&h=400"));
    }
}
