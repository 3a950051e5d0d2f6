//! Data transfer objects for web requests and responses.
//!
//! The response body is the serialized [`crate::domain::Itinerary`]
//! itself: `{ "routes": [ [ step, ... ], ... ] }` with the published
//! step field names.

use serde::{Deserialize, Serialize};

/// Query parameters for a route request.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin address (free text, any language Google geocodes)
    pub origin: String,

    /// Destination address
    pub destination: String,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub error: String,
}
