//! Directions client error types.

/// Errors from the directions (Google Routes) client.
///
/// All of these are fatal for the request: without a directions response
/// there is no itinerary to return.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized: check GOOGLE_API_KEY")]
    Unauthorized,

    /// API returned an error status code
    #[error("directions API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
