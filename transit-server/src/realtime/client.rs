//! curlbus HTTP client.
//!
//! curlbus serves live arrival boards per GTFS stop code as plain text
//! (a box-drawing table meant for terminals). We fetch the raw text and
//! leave the table parsing to [`super::parse`].

use crate::domain::StopCode;

use super::error::RealtimeError;

/// Default base URL for curlbus.
const DEFAULT_BASE_URL: &str = "https://curlbus.app";

/// Configuration for the curlbus client.
#[derive(Debug, Clone)]
pub struct CurlbusConfig {
    /// Base URL for the feed (defaults to production curlbus).
    pub base_url: String,
    /// Request timeout in seconds. Realtime lookups run under a tight
    /// 3-second budget: stale live data is worse than none.
    pub timeout_secs: u64,
}

impl CurlbusConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 3,
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

impl Default for CurlbusConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the curlbus live-arrivals feed.
#[derive(Debug, Clone)]
pub struct CurlbusClient {
    http: reqwest::Client,
    base_url: String,
}

impl CurlbusClient {
    /// Create a new curlbus client.
    pub fn new(config: CurlbusConfig) -> Result<Self, RealtimeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the raw arrival board for a stop.
    pub async fn board(&self, stop_code: &StopCode) -> Result<String, RealtimeError> {
        let url = format!("{}/{}", self.base_url, stop_code);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RealtimeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}
