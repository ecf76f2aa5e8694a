//! Error types for catalog requests.

use thiserror::Error;

/// Errors that can end a fetch cycle.
///
/// The display string of each variant is exactly what the view shows: a
/// non-success status collapses to one generic message (the status code is
/// logged, never displayed), while transport and parse failures surface
/// the underlying error's message verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint was reached but answered with a non-success status.
    #[error("Something went wrong...")]
    Status { code: u16 },

    /// The request failed at the transport level.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The response body was not valid JSON in either catalog shape.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns `true` when the endpoint answered but with a failure status.
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Convenience alias for catalog results.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
