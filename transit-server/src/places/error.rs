//! Places client error types.

/// Errors from the places (Google Places v1) client.
///
/// Like directions errors, these are fatal for the request: without the
/// origin city there is nothing to match stops against, and the error
/// taxonomy classifies places failures as upstream-unavailable.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized: check GOOGLE_API_KEY")]
    Unauthorized,

    /// API returned an error status code
    #[error("places API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The place has no locality address component
    #[error("no locality in address components for place {place_id}")]
    NoLocality { place_id: String },
}
