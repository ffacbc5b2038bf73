//! Newtype IDs for type-safe CMS object references.
//!
//! Cosmic object IDs are opaque hex strings. Use the `define_id!` macro to
//! create wrappers that prevent accidentally mixing IDs from different
//! content types.

/// Macro to define a type-safe object ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use cosmic_shop_core::define_id;
/// define_id!(PostId);
/// define_id!(AuthorId);
///
/// let post_id = PostId::new("65a1f0c2e4b0");
/// let author_id = AuthorId::new("65a1f0c2e4b0");
///
/// // These are different types, so this won't compile:
/// // let _: PostId = author_id;
/// # let _ = (post_id, author_id);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying ID string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(CollectionId);
define_id!(ProductId);
define_id!(ReviewId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_access() {
        let id = ProductId::new("65b2c3d4e5f6");
        assert_eq!(id.as_str(), "65b2c3d4e5f6");
        assert_eq!(id.to_string(), "65b2c3d4e5f6");
        assert_eq!(String::from(id), "65b2c3d4e5f6");
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let id = CollectionId::from("abc123");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"abc123\"");

        let back: CollectionId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
