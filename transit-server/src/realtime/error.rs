//! Realtime feed error types.

/// Errors from the curlbus live-arrivals client.
///
/// Never fatal: a failed lookup becomes `status: error` on the affected
/// step and the itinerary is returned regardless.
#[derive(Debug, thiserror::Error)]
pub enum RealtimeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned an error status code
    #[error("realtime feed error {status}: {message}")]
    Api { status: u16, message: String },
}
