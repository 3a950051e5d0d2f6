//! Google Routes HTTP client.
//!
//! Issues `computeRoutes` requests with a field mask restricted to
//! transit step details and geocoding results, keeping response payloads
//! small. Locale is pinned to Hebrew: stop names must come back in the
//! same language the GTFS registry uses, or stop matching has no chance.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::json;

use super::convert::{DirectionsResult, convert_response};
use super::error::DirectionsError;
use super::types::ComputeRoutesResponse;

/// Default base URL for the Routes API.
const DEFAULT_BASE_URL: &str = "https://routes.googleapis.com";

/// Field mask limiting the response to transit details and geocoding.
const FIELD_MASK: &str = "routes.legs.steps.transitDetails,geocodingResults";

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// Google API key sent in the `X-Goog-Api-Key` header.
    pub api_key: String,
    /// Base URL for the API (defaults to production).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the Google Routes API.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectionsClient {
    /// Create a new directions client.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| DirectionsError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-goog-api-key"), api_key);
        headers.insert(
            HeaderName::from_static("x-goog-fieldmask"),
            HeaderValue::from_static(FIELD_MASK),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Compute transit routes between two addresses.
    ///
    /// Asks for alternative routes with a less-walking preference across
    /// all Israeli transit modes, in Hebrew.
    pub async fn compute_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DirectionsResult, DirectionsError> {
        let url = format!("{}/directions/v2:computeRoutes", self.base_url);

        let payload = json!({
            "languageCode": "he-IL",
            "origin": { "address": origin },
            "destination": { "address": destination },
            "travelMode": "TRANSIT",
            "computeAlternativeRoutes": true,
            "transitPreferences": {
                "routingPreference": "LESS_WALKING",
                "allowedTravelModes": ["BUS", "TRAIN", "LIGHT_RAIL", "RAIL"]
            }
        });

        let response = self.http.post(&url).json(&payload).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectionsError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: ComputeRoutesResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
            })?;

        Ok(convert_response(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = DirectionsConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn config_builder() {
        let config = DirectionsConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let client = DirectionsClient::new(DirectionsConfig::new("test-key"));
        assert!(client.is_ok());
    }
}
