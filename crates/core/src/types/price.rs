//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;

/// A price in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    /// Amount in dollars, not cents.
    pub amount: Decimal,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Whether the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Format for display.
    ///
    /// Whole amounts drop the fractional part (`$80`), anything else is shown
    /// with two decimal places (`$79.50`).
    #[must_use]
    pub fn display(&self) -> String {
        let amount = self.amount.round_dp(2);
        if amount.fract().is_zero() {
            format!("${}", amount.trunc().normalize())
        } else {
            format!("${amount:.2}")
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Which pricing branch a product renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDisplay {
    /// No discount applies; only the price is shown.
    Regular {
        /// The list price.
        price: Price,
    },
    /// A sale price applies; the list price is struck through.
    Discounted {
        /// The price the customer pays.
        sale: Price,
        /// The struck-through list price.
        original: Price,
        /// `original - sale`, always positive.
        savings: Price,
    },
}

impl PriceDisplay {
    /// Choose between regular and discounted pricing.
    ///
    /// A sale price only counts when it is positive and strictly below the
    /// list price; otherwise the product renders at its regular price.
    #[must_use]
    pub fn from_prices(price: Price, sale_price: Option<Price>) -> Self {
        match sale_price {
            Some(sale) if sale.is_positive() && sale.amount < price.amount => Self::Discounted {
                sale,
                original: price,
                savings: Price::new(price.amount - sale.amount),
            },
            _ => Self::Regular { price },
        }
    }

    /// The price the customer pays.
    #[must_use]
    pub const fn current(&self) -> Price {
        match self {
            Self::Regular { price } => *price,
            Self::Discounted { sale, .. } => *sale,
        }
    }

    /// The struck-through list price, if discounted.
    #[must_use]
    pub const fn original(&self) -> Option<Price> {
        match self {
            Self::Regular { .. } => None,
            Self::Discounted { original, .. } => Some(*original),
        }
    }

    /// The discount amount, if discounted.
    #[must_use]
    pub const fn savings(&self) -> Option<Price> {
        match self {
            Self::Regular { .. } => None,
            Self::Discounted { savings, .. } => Some(*savings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(amount: i64, scale: u32) -> Price {
        Price::new(Decimal::new(amount, scale))
    }

    #[test]
    fn test_display_whole_amount() {
        assert_eq!(usd(80, 0).display(), "$80");
        assert_eq!(usd(8000, 2).display(), "$80");
    }

    #[test]
    fn test_display_fractional_amount() {
        assert_eq!(usd(795, 1).display(), "$79.50");
        assert_eq!(usd(1999, 2).display(), "$19.99");
    }

    #[test]
    fn test_display_rounds_to_cents() {
        assert_eq!(usd(12499, 3).to_string(), "$12.50");
        assert_eq!(usd(79999, 3).to_string(), "$80");
    }

    #[test]
    fn test_regular_when_no_sale_price() {
        let display = PriceDisplay::from_prices(usd(100, 0), None);
        assert_eq!(display, PriceDisplay::Regular { price: usd(100, 0) });
        assert_eq!(display.current(), usd(100, 0));
        assert!(display.original().is_none());
        assert!(display.savings().is_none());
    }

    #[test]
    fn test_discounted_when_sale_below_price() {
        let display = PriceDisplay::from_prices(usd(100, 0), Some(usd(80, 0)));
        assert!(matches!(display, PriceDisplay::Discounted { .. }));
        assert_eq!(display.current().display(), "$80");
        assert_eq!(display.original().map(|p| p.display()), Some("$100".into()));
        assert_eq!(display.savings().map(|p| p.display()), Some("$20".into()));
    }

    #[test]
    fn test_fractional_savings() {
        let display = PriceDisplay::from_prices(usd(2999, 2), Some(usd(2450, 2)));
        assert_eq!(display.savings().map(|p| p.display()), Some("$5.49".into()));
    }

    #[test]
    fn test_sale_not_below_price_is_regular() {
        let equal = PriceDisplay::from_prices(usd(50, 0), Some(usd(50, 0)));
        assert_eq!(equal, PriceDisplay::Regular { price: usd(50, 0) });

        let higher = PriceDisplay::from_prices(usd(50, 0), Some(usd(60, 0)));
        assert_eq!(higher, PriceDisplay::Regular { price: usd(50, 0) });
    }

    #[test]
    fn test_zero_sale_price_is_regular() {
        let display = PriceDisplay::from_prices(usd(50, 0), Some(usd(0, 0)));
        assert_eq!(display.current(), usd(50, 0));
    }
}
