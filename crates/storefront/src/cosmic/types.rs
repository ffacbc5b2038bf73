//! Catalog entities as stored in Cosmic.
//!
//! These mirror the Cosmic object JSON (`id`, `slug`, `title`, plus a
//! `metadata` bag of custom fields). Deserialization is deliberately lenient
//! about metafields the CMS editor may leave blank: a malformed value falls
//! back to a neutral default instead of rejecting the whole object.

use std::str::FromStr;

use cosmic_shop_core::{
    CollectionId, Price, ProductId, Rating, RatingSummary, ReviewId, StockStatus,
};
use rust_decimal::Decimal;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Images
// =============================================================================

/// A Cosmic file metafield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmicImage {
    /// Original file URL.
    #[serde(default)]
    pub url: String,
    /// imgix-served URL that accepts transform parameters.
    #[serde(default)]
    pub imgix_url: String,
}

impl CosmicImage {
    /// URL to append transform parameters to.
    #[must_use]
    pub fn transform_base(&self) -> &str {
        if self.imgix_url.is_empty() {
            &self.url
        } else {
            &self.imgix_url
        }
    }
}

// =============================================================================
// Relations
// =============================================================================

/// An object relation: expanded inline at depth >= 1, a bare ID otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Related<T> {
    Object(Box<T>),
    Id(String),
}

impl<T> Related<T> {
    /// The expanded object, if the query asked for it.
    #[must_use]
    pub fn object(&self) -> Option<&T> {
        match self {
            Self::Object(obj) => Some(obj),
            Self::Id(_) => None,
        }
    }
}

// =============================================================================
// Collection
// =============================================================================

/// A product collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub metadata: CollectionMetadata,
}

/// Custom fields on a collection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CollectionMetadata {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_image")]
    pub featured_image: Option<CosmicImage>,
}

impl Collection {
    /// Display name, falling back to the object title.
    #[must_use]
    pub fn name(&self) -> &str {
        non_blank(&self.metadata.name).unwrap_or(self.title.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub slug: String,
    #[serde(default)]
    pub title: String,
    /// Primary image URL.
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail: String,
    #[serde(default)]
    pub metadata: ProductMetadata,
}

/// Custom fields on a product.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductMetadata {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Rich text (HTML) authored in the CMS.
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub sale_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_images")]
    pub images: Vec<CosmicImage>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub in_stock: bool,
    #[serde(default, deserialize_with = "lenient_related")]
    pub collection: Option<Related<Collection>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sku: String,
}

impl Product {
    /// Display name, falling back to the object title.
    #[must_use]
    pub fn name(&self) -> &str {
        non_blank(&self.metadata.name).unwrap_or(self.title.as_str())
    }

    /// List price. A missing or malformed price renders as zero.
    #[must_use]
    pub fn price(&self) -> Price {
        Price::new(self.metadata.price.unwrap_or(Decimal::ZERO))
    }

    /// Sale price as entered; whether it applies is decided by
    /// [`cosmic_shop_core::PriceDisplay::from_prices`].
    #[must_use]
    pub fn sale_price(&self) -> Option<Price> {
        self.metadata.sale_price.map(Price::new)
    }

    #[must_use]
    pub fn stock(&self) -> StockStatus {
        StockStatus::from(self.metadata.in_stock)
    }

    /// Owning collection, when it was expanded by the query.
    #[must_use]
    pub fn collection(&self) -> Option<&Collection> {
        self.metadata.collection.as_ref().and_then(Related::object)
    }

    #[must_use]
    pub fn sku(&self) -> Option<&str> {
        non_blank(&self.metadata.sku)
    }
}

// =============================================================================
// Review
// =============================================================================

/// A customer review of a product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub metadata: ReviewMetadata,
}

/// Custom fields on a review.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReviewMetadata {
    #[serde(default, deserialize_with = "lenient_related")]
    pub product: Option<Related<Product>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub customer_name: String,
    #[serde(default)]
    pub rating: ReviewRating,
    #[serde(default, deserialize_with = "lenient_string")]
    pub review_text: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub verified_purchase: bool,
}

/// A review's select-dropdown rating: `{"key": "5", "value": "5 Stars"}`.
///
/// The key is validated into a [`Rating`]; anything unparsable leaves
/// `rating` as `None`, which renders as zero stars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewRating {
    pub rating: Option<Rating>,
    pub label: String,
}

impl<'de> Deserialize<'de> for ReviewRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let (key, label) = match &value {
            Value::Object(map) => (
                map.get("key").and_then(scalar_to_string),
                map.get("value")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            ),
            other => (scalar_to_string(other), String::new()),
        };

        Ok(Self {
            rating: key.and_then(|k| Rating::from_str(&k).ok()),
            label,
        })
    }
}

impl Review {
    /// Star count for this review, zero when the rating was invalid.
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.metadata.rating.rating.map_or(0, Rating::stars)
    }
}

/// Aggregate the ratings of a list of reviews.
#[must_use]
pub fn rating_summary(reviews: &[Review]) -> RatingSummary {
    RatingSummary::from_ratings(reviews.iter().map(|r| r.metadata.rating.rating))
}

// =============================================================================
// Lenient metafield deserializers
// =============================================================================

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string).unwrap_or_default())
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Parse a number or numeric string into a decimal.
fn decimal_from_value(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

fn lenient_decimal<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Decimal>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

fn image_from_value(value: Value) -> Option<CosmicImage> {
    let image: CosmicImage = serde_json::from_value(value).ok()?;
    (!image.transform_base().is_empty()).then_some(image)
}

fn lenient_image<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<CosmicImage>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(image_from_value))
}

fn lenient_images<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<CosmicImage>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().filter_map(image_from_value).collect(),
        _ => Vec::new(),
    })
}

fn lenient_related<'de, D, T>(deserializer: D) -> Result<Option<Related<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(id)) if !id.is_empty() => Some(Related::Id(id)),
        Some(obj @ Value::Object(_)) => serde_json::from_value::<T>(obj)
            .ok()
            .map(|t| Related::Object(Box::new(t))),
        _ => None,
    })
}
