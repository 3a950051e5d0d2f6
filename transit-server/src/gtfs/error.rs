//! GTFS registry client error types.

/// Errors from the GTFS stop registry client.
///
/// These never fail a request: the matcher treats any of them like an
/// unmatched stop and the affected step goes out without realtime data.
#[derive(Debug, thiserror::Error)]
pub enum GtfsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("GTFS API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
