//! Error types for feed decoding.
//!
//! Two levels of failure exist:
//! - [`FeedError`]: the whole document is unusable (not JSON, wrong shape)
//! - [`RecordError`]: a single item is malformed; callers drop it and keep going

use thiserror::Error;

/// An error that makes the whole feed document unusable.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The document is not valid JSON or does not have an `items` list.
    #[error("invalid feed document: {0}")]
    Json(#[from] serde_json::Error),

    /// The feed reported an error instead of items.
    #[error("feed returned an error: {message}")]
    Remote { message: String },
}

impl FeedError {
    /// Creates a remote error.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }
}

/// A specialized Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Why a single feed item could not become a holiday.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The item has no title, or only whitespace.
    #[error("item has no title")]
    MissingTitle,

    /// The item has no date.
    #[error("item {title:?} has no date")]
    MissingDate { title: String },

    /// The item date is not a calendar date.
    #[error("item {title:?} has an unparseable date {value:?}")]
    InvalidDate { title: String, value: String },
}
