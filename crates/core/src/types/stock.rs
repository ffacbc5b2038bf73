//! Stock availability.

use serde::{Deserialize, Serialize};

/// Whether a product can currently be bought.
///
/// Maps the CMS `in_stock` switch onto a badge label and style class that
/// every product-bearing page renders identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// Badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }

    /// CSS class for the badge.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::InStock => "badge-in-stock",
            Self::OutOfStock => "badge-out-of-stock",
        }
    }

    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::InStock)
    }
}

impl From<bool> for StockStatus {
    fn from(in_stock: bool) -> Self {
        if in_stock {
            Self::InStock
        } else {
            Self::OutOfStock
        }
    }
}
