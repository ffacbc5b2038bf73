//! Small text helpers for display labels.

/// Format a count with a singular or plural noun.
///
/// Appends `s` to the noun for every count other than one, which covers the
/// catalog's nouns ("product", "review").
///
/// ```
/// use cosmic_shop_core::text::pluralize;
///
/// assert_eq!(pluralize(1, "review"), "1 review");
/// assert_eq!(pluralize(0, "review"), "0 reviews");
/// assert_eq!(pluralize(12, "product"), "12 products");
/// ```
#[must_use]
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "product"), "1 product");
        assert_eq!(pluralize(2, "product"), "2 products");
        assert_eq!(pluralize(0, "product"), "0 products");
    }
}
