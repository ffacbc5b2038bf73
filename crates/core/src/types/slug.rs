//! URL slug type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[A-Za-z0-9-_]`.
    #[error("slug contains invalid character {0:?}")]
    InvalidChar(char),
}

/// A CMS object slug.
///
/// Slugs are the sole lookup key for collection and product detail pages.
///
/// ## Constraints
///
/// - Length: 1-200 characters
/// - ASCII letters, digits, `-` and `_` only
/// - Stored lowercase: `Classic-Tee` and `classic-tee` name the same object
///
/// ## Examples
///
/// ```
/// use cosmic_shop_core::Slug;
///
/// assert!(Slug::parse("summer-collection").is_ok());
/// assert!(Slug::parse("tee_2024").is_ok());
/// assert_eq!(Slug::parse("Classic-Tee").unwrap().as_str(), "classic-tee");
///
/// assert!(Slug::parse("").is_err());
/// assert!(Slug::parse("../etc/passwd").is_err());
/// assert!(Slug::parse("Has Spaces").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Maximum accepted slug length.
    pub const MAX_LENGTH: usize = 200;

    /// Parse a `Slug` from a string, folding ASCII uppercase to lowercase.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, or contains a
    /// character that Cosmic never emits in a slug.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let slug = s.to_ascii_lowercase();
        if let Some(bad) = slug
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
        {
            return Err(SlugError::InvalidChar(bad));
        }

        Ok(Self(slug))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let slug = Slug::parse("classic-tee").expect("valid slug");
        assert_eq!(slug.as_str(), "classic-tee");
        assert_eq!(slug.to_string(), "classic-tee");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Slug::parse(""), Err(SlugError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(Slug::MAX_LENGTH + 1);
        assert_eq!(
            Slug::parse(&long),
            Err(SlugError::TooLong {
                max: Slug::MAX_LENGTH
            })
        );
    }

    #[test]
    fn test_parse_folds_uppercase() {
        let slug = Slug::parse("Classic-TEE").expect("valid slug");
        assert_eq!(slug.as_str(), "classic-tee");
        assert_eq!(slug, Slug::parse("classic-tee").expect("valid slug"));
    }

    #[test]
    fn test_parse_rejects_separators() {
        assert_eq!(Slug::parse("a/b"), Err(SlugError::InvalidChar('/')));
        assert_eq!(Slug::parse("a b"), Err(SlugError::InvalidChar(' ')));
    }
}
