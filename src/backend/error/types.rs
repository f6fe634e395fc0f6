/**
 * Backend Error Types
 *
 * Errors raised while handling HTTP requests. Every variant maps to a status
 * code and a message, and none of them ends the process: the worker answers
 * the request and the tree is left untouched.
 *
 * # Error Categories
 *
 * - Malformed identifiers (`/reply/abc`) - 400 Bad Request
 * - Unknown identifiers (`/reply/99`) - 404 Not Found
 * - Template rendering failures - 500 Internal Server Error
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use threadboard::backend::error::BackendError;
/// use threadboard::forum::PostId;
/// use threadboard::shared::SharedError;
/// use axum::http::StatusCode;
///
/// let err: BackendError = SharedError::not_found(PostId::new(99)).into();
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from the forum core or id parsing
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Askama failed to render a view
    #[error("Render error: {0}")]
    RenderError(#[from] askama::Error),
}

impl BackendError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidId` - 400 Bad Request
    /// - `PostNotFound` - 404 Not Found
    /// - `RenderError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SharedError(err) => match err {
                SharedError::InvalidId { .. } => StatusCode::BAD_REQUEST,
                SharedError::PostNotFound { .. } => StatusCode::NOT_FOUND,
            },
            Self::RenderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message shown to the caller
    pub fn message(&self) -> String {
        self.to_string()
    }
}
