//! Recommender error types.

use thiserror::Error;

/// Errors raised while fitting the catalog or answering a query.
///
/// None of these depend on query content: a query that matches nothing is a
/// successful, all-zero-score result, never an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// No catalog entry carries the required field.
    #[error("catalog schema error: no entry has a '{field}' field")]
    Schema { field: &'static str },

    /// The catalog has no entries at all.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// A query was made before the catalog was fitted.
    #[error("recommender is not fitted; fit the catalog before querying")]
    NotFitted,

    /// The catalog was fitted a second time.
    #[error("recommender is already fitted")]
    AlreadyFitted,
}

impl RecommendError {
    /// Returns `true` for errors that should stop the service from starting.
    pub fn is_startup_fatal(&self) -> bool {
        matches!(self, Self::Schema { .. } | Self::EmptyCatalog)
    }

    /// Returns `true` when the caller used the recommender out of order.
    pub fn is_misuse(&self) -> bool {
        matches!(self, Self::NotFitted | Self::AlreadyFitted)
    }
}

/// Convenience alias for recommender results.
pub type Result<T> = std::result::Result<T, RecommendError>;
