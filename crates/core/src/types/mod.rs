//! Core types for Cosmic Shop.
//!
//! This module provides type-safe wrappers for catalog domain concepts.

pub mod id;
pub mod price;
pub mod rating;
pub mod slug;
pub mod stock;

pub use id::*;
pub use price::{Price, PriceDisplay};
pub use rating::{MAX_STARS, Rating, RatingError, RatingSummary};
pub use slug::{Slug, SlugError};
pub use stock::StockStatus;
