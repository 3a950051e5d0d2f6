//! Google Places HTTP client.
//!
//! Resolves a place id (from the directions geocoding results) to a city
//! name, by picking the `locality` address component. Requested in
//! Hebrew so the city name matches the GTFS registry's naming.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;

use super::error::PlacesError;

/// Default base URL for the Places API.
const DEFAULT_BASE_URL: &str = "https://places.googleapis.com";

/// An address component of a place.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponent {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub long_text: Option<String>,
}

/// Place details, restricted by field mask to address components.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResponse {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

/// Configuration for the places client.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// Google API key sent in the `X-Goog-Api-Key` header.
    pub api_key: String,
    /// Base URL for the API (defaults to production).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl PlacesConfig {
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
}

/// Client for the Google Places API.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlacesClient {
    /// Create a new places client.
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| PlacesError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-goog-api-key"), api_key);
        headers.insert(
            HeaderName::from_static("x-goog-fieldmask"),
            HeaderValue::from_static("addressComponents"),
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

    /// Resolve a place id to its city (locality) name.
    pub async fn city_for_place(&self, place_id: &str) -> Result<String, PlacesError> {
        let url = format!("{}/v1/places/{}", self.base_url, place_id);

        let response = self
            .http
            .get(&url)
            .query(&[("languageCode", "he")])
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(PlacesError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let place: PlaceResponse = serde_json::from_str(&body).map_err(|e| PlacesError::Json {
            message: e.to_string(),
        })?;

        extract_locality(&place).ok_or_else(|| PlacesError::NoLocality {
            place_id: place_id.to_string(),
        })
    }
}

/// Pick the locality component's long text, if present.
fn extract_locality(place: &PlaceResponse) -> Option<String> {
    place
        .address_components
        .iter()
        .find(|c| c.types.iter().any(|t| t == "locality"))
        .and_then(|c| c.long_text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_locality_picks_locality_component() {
        let place: PlaceResponse = serde_json::from_str(
            r#"{
                "addressComponents": [
                    { "types": ["street_number"], "longText": "12" },
                    { "types": ["locality", "political"], "longText": "תל אביב-יפו" },
                    { "types": ["country"], "longText": "ישראל" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(extract_locality(&place).as_deref(), Some("תל אביב-יפו"));
    }

    #[test]
    fn extract_locality_missing() {
        let place: PlaceResponse = serde_json::from_str(
            r#"{ "addressComponents": [ { "types": ["country"], "longText": "ישראל" } ] }"#,
        )
        .unwrap();

        assert_eq!(extract_locality(&place), None);
    }

    #[test]
    fn config_defaults() {
        let config = PlacesConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 10);
    }
}
