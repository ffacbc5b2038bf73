//! imgix transform URLs.

use crate::cosmic::CosmicImage;

/// Fixed image sizes used by the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePreset {
    ProductCard,
    ProductHero,
    GalleryThumbnail,
    CollectionBanner,
    CollectionCard,
}

impl ImagePreset {
    /// Target `(width, height)` in pixels.
    #[must_use]
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::ProductCard | Self::CollectionCard => (600, 400),
            Self::ProductHero => (800, 800),
            Self::GalleryThumbnail => (200, 200),
            Self::CollectionBanner => (1200, 400),
        }
    }
}

/// Append crop and format parameters for `preset` to an image URL.
///
/// ```
/// use cosmic_shop_storefront::views::{ImagePreset, transform_url};
///
/// assert_eq!(
///     transform_url("https://imgix.cosmicjs.com/tee.jpg", ImagePreset::GalleryThumbnail),
///     "https://imgix.cosmicjs.com/tee.jpg?w=200&h=200&fit=crop&auto=format,compress"
/// );
/// ```
#[must_use]
pub fn transform_url(base: &str, preset: ImagePreset) -> String {
    let (w, h) = preset.dimensions();
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}w={w}&h={h}&fit=crop&auto=format,compress")
}

/// Image display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

impl ImageView {
    /// Build a sized image, or `None` when there is no source URL.
    #[must_use]
    pub fn new(base: &str, preset: ImagePreset, alt: &str) -> Option<Self> {
        let base = base.trim();
        if base.is_empty() {
            return None;
        }
        Some(Self {
            url: transform_url(base, preset),
            alt: alt.to_string(),
        })
    }

    /// Build a sized image from a CMS file metafield.
    #[must_use]
    pub fn from_cosmic(image: &CosmicImage, preset: ImagePreset, alt: &str) -> Option<Self> {
        Self::new(image.transform_base(), preset, alt)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(ImagePreset::ProductCard.dimensions(), (600, 400));
        assert_eq!(ImagePreset::ProductHero.dimensions(), (800, 800));
        assert_eq!(ImagePreset::GalleryThumbnail.dimensions(), (200, 200));
        assert_eq!(ImagePreset::CollectionBanner.dimensions(), (1200, 400));
        assert_eq!(ImagePreset::CollectionCard.dimensions(), (600, 400));
    }

    #[test]
    fn test_transform_url_appends_to_existing_query() {
        assert_eq!(
            transform_url("https://cdn.example.com/a.png?v=2", ImagePreset::ProductHero),
            "https://cdn.example.com/a.png?v=2&w=800&h=800&fit=crop&auto=format,compress"
        );
    }

    #[test]
    fn test_image_view_requires_url() {
        assert!(ImageView::new("  ", ImagePreset::ProductCard, "Tee").is_none());

        let view = ImageView::new("https://imgix.cosmicjs.com/t.jpg", ImagePreset::ProductCard, "Tee")
            .unwrap();
        assert_eq!(view.alt, "Tee");
        assert!(view.url.ends_with("?w=600&h=400&fit=crop&auto=format,compress"));
    }

    #[test]
    fn test_from_cosmic_prefers_imgix_url() {
        let image = CosmicImage {
            url: "https://cdn.cosmicjs.com/t.jpg".to_string(),
            imgix_url: "https://imgix.cosmicjs.com/t.jpg".to_string(),
        };
        let view = ImageView::from_cosmic(&image, ImagePreset::CollectionBanner, "Summer").unwrap();
        assert!(view.url.starts_with("https://imgix.cosmicjs.com/t.jpg?w=1200&h=400"));
    }
}
