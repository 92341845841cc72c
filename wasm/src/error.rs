//! Error handling for the browser client

use thiserror::Error;

/// Errors surfaced by the API client
///
/// The `Display` strings double as the user-facing messages; the view
/// layer never branches on the variant, it only shows the text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Session expired. Please reload the page.")]
    Unauthorized,

    #[error("Rate limit exceeded. Try again in {reset} seconds.")]
    RateLimited { reset: String },

    #[error("{0}")]
    Backend(String),

    #[error("Network request failed: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Result type alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;
