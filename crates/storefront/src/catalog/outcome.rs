//! Tagged fetch outcomes.

use thiserror::Error;

use crate::cosmic::CosmicError;

/// Why a fetch produced no data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// The request never got an answer.
    #[error("content API unreachable: {0}")]
    Transport(String),

    /// The API answered with an error status.
    #[error("content API returned HTTP {status}")]
    Upstream { status: u16 },

    /// The API answered, but not with something we can read.
    #[error("malformed content payload: {0}")]
    Malformed(String),
}

impl From<CosmicError> for FetchFailure {
    fn from(err: CosmicError) -> Self {
        match err {
            CosmicError::Http(e) => Self::Transport(e.to_string()),
            CosmicError::InvalidUrl(e) => Self::Transport(e.to_string()),
            CosmicError::Api { status, .. } => Self::Upstream { status },
            CosmicError::NotFound(_) => Self::Upstream { status: 404 },
            CosmicError::Parse(e) => Self::Malformed(e.to_string()),
        }
    }
}

/// Result of a catalog fetch.
///
/// Single-object lookups produce `Found`, `NotFound`, or `Failed`. List
/// fetches produce `Found` (never with an empty list), `Empty`, or `Failed`.
/// The page layer decides how each one renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Found(T),
    NotFound,
    Empty,
    Failed(FetchFailure),
}

impl<T> Fetched<T> {
    /// The data, if any was found.
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound | Self::Empty | Self::Failed(_) => None,
        }
    }

    /// The failure reason, if the fetch failed.
    #[must_use]
    pub const fn failure(&self) -> Option<&FetchFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

impl<T> Fetched<Vec<T>> {
    /// Wrap a list, tagging an empty one as `Empty`.
    #[must_use]
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Found(items)
        }
    }

    /// The items, or an empty list for every other outcome.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.found().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_items_tags_empty() {
        assert_eq!(Fetched::<Vec<u8>>::from_items(Vec::new()), Fetched::Empty);
        assert_eq!(Fetched::from_items(vec![1, 2]), Fetched::Found(vec![1, 2]));
    }

    #[test]
    fn test_into_items_defaults_to_empty() {
        let failed: Fetched<Vec<u8>> = Fetched::Failed(FetchFailure::Upstream { status: 500 });
        assert!(failed.into_items().is_empty());
        assert!(Fetched::<Vec<u8>>::NotFound.into_items().is_empty());
        assert_eq!(Fetched::Found(vec![3]).into_items(), vec![3]);
    }

    #[test]
    fn test_found_and_failure_accessors() {
        let found = Fetched::Found("x");
        assert!(found.failure().is_none());
        assert_eq!(found.found(), Some("x"));

        let failed: Fetched<&str> = Fetched::Failed(FetchFailure::Malformed("eof".to_string()));
        assert_eq!(
            failed.failure(),
            Some(&FetchFailure::Malformed("eof".to_string()))
        );
        assert_eq!(failed.found(), None);
    }

    #[test]
    fn test_failure_from_cosmic_error() {
        let err = CosmicError::Api {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(FetchFailure::from(err), FetchFailure::Upstream { status: 503 });
    }
}
