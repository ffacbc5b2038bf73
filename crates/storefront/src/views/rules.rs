//! Render rules: which conditional branch of a page to show.
//!
//! Every function here is pure and picks exactly one branch from an
//! already-mapped view model.

use cosmic_shop_core::StockStatus;

use crate::cosmic::Product;

/// Most thumbnails shown under a product hero image.
pub const MAX_GALLERY_THUMBNAILS: usize = 4;

/// Shown in place of the review list when a product has no reviews.
pub const NO_REVIEWS_MESSAGE: &str = "No reviews yet. Be the first to review this product!";

/// Which region a list page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRegion {
    Grid,
    EmptyState,
}

impl ListRegion {
    #[must_use]
    pub const fn is_grid(self) -> bool {
        matches!(self, Self::Grid)
    }
}

/// Grid when there is anything to show, empty state otherwise.
#[must_use]
pub const fn list_region<T>(items: &[T]) -> ListRegion {
    if items.is_empty() {
        ListRegion::EmptyState
    } else {
        ListRegion::Grid
    }
}

/// Gallery thumbnails: none for a single image, otherwise the first few.
#[must_use]
pub fn gallery_thumbnails<T>(images: &[T]) -> &[T] {
    if images.len() <= 1 {
        return &[];
    }
    images
        .get(..images.len().min(MAX_GALLERY_THUMBNAILS))
        .unwrap_or(images)
}

/// Link back to a product's collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionLink {
    pub slug: String,
    pub name: String,
}

/// Breadcrumb to the owning collection, only when it was expanded.
#[must_use]
pub fn breadcrumb(product: &Product) -> Option<CollectionLink> {
    product.collection().map(|collection| CollectionLink {
        slug: collection.slug.clone(),
        name: collection.name().to_string(),
    })
}

/// The "SKU: ..." line, only for a non-blank SKU.
#[must_use]
pub fn sku_line(product: &Product) -> Option<String> {
    product.sku().map(|sku| format!("SKU: {sku}"))
}

/// State of the add-to-cart control. It has no action attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartButton {
    pub enabled: bool,
    pub label: &'static str,
}

#[must_use]
pub const fn cart_button(stock: StockStatus) -> CartButton {
    if stock.is_available() {
        CartButton {
            enabled: true,
            label: "Add to Cart",
        }
    } else {
        CartButton {
            enabled: false,
            label: "Out of Stock",
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
            "metadata": metadata
        }))
        .unwrap()
    }

    #[test]
    fn test_list_region() {
        assert_eq!(list_region::<u8>(&[]), ListRegion::EmptyState);
        assert_eq!(list_region(&[1]), ListRegion::Grid);
        assert!(list_region(&[1, 2]).is_grid());
    }

    #[test]
    fn test_gallery_hidden_for_single_image() {
        assert!(gallery_thumbnails(&["a"]).is_empty());
        assert!(gallery_thumbnails::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_gallery_capped() {
        assert_eq!(gallery_thumbnails(&["a", "b"]), &["a", "b"]);
        assert_eq!(
            gallery_thumbnails(&["a", "b", "c", "d", "e"]),
            &["a", "b", "c", "d"]
        );
    }

    #[test]
    fn test_breadcrumb_needs_expanded_collection() {
        let bare = product(json!({"collection": "c1"}));
        assert!(breadcrumb(&bare).is_none());

        let expanded = product(json!({
            "collection": {
                "id": "c1",
                "slug": "summer",
                "title": "Summer",
                "metadata": {"name": "Summer Sale"}
            }
        }));
        assert_eq!(
            breadcrumb(&expanded).unwrap(),
            CollectionLink {
                slug: "summer".to_string(),
                name: "Summer Sale".to_string(),
            }
        );
    }

    #[test]
    fn test_sku_line() {
        assert_eq!(sku_line(&product(json!({"sku": "TEE-01"}))).unwrap(), "SKU: TEE-01");
        assert!(sku_line(&product(json!({"sku": "  "}))).is_none());
        assert!(sku_line(&product(json!({}))).is_none());
    }

    #[test]
    fn test_cart_button() {
        let on = cart_button(StockStatus::InStock);
        assert!(on.enabled);
        assert_eq!(on.label, "Add to Cart");

        let off = cart_button(StockStatus::OutOfStock);
        assert!(!off.enabled);
        assert_eq!(off.label, "Out of Stock");
    }
}
