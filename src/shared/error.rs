//! Shared Error Types
//!
//! Errors that can arise outside the HTTP layer, such as parsing a post
//! identifier out of a request path. The backend wraps these in
//! `BackendError` when they need to become HTTP responses.
//!
//! # Usage
//!
//! ```rust
//! use threadboard::forum::PostId;
//! use threadboard::shared::SharedError;
//!
//! let err = "abc".parse::<PostId>().unwrap_err();
//! assert!(matches!(err, SharedError::InvalidId { .. }));
//! ```
use thiserror::Error;

use crate::forum::PostId;

/// Errors shared between the forum core and the backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// The text could not be parsed as a post identifier
    #[error("invalid id {raw}: {reason}")]
    InvalidId {
        /// The text as received
        raw: String,
        /// Why parsing failed
        reason: String,
    },

    /// No post with this identifier exists in the tree
    #[error("couldn't find post {id}")]
    PostNotFound {
        /// The identifier that was looked up
        id: PostId,
    },
}

impl SharedError {
    /// Create a new invalid identifier error
    pub fn invalid_id(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidId {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(id: PostId) -> Self {
        Self::PostNotFound { id }
    }
}
