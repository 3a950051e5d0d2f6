//! Open Bus Stride GTFS stops client.
//!
//! The Stride API exposes the national GTFS registry as a queryable
//! service. Stops are listed per city and per service date; the registry
//! is refreshed weekly, so we query the most recent Thursday strictly
//! before today, which is always a fully-loaded date.

use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;

use super::error::GtfsError;

/// Default base URL for the Stride API.
const DEFAULT_BASE_URL: &str = "https://open-bus-stride-api.hasadna.org.il";

/// Row limit for stop listings. A whole city fits well under this.
const STOP_LIMIT: u32 = 500_000;

/// A stop row from the registry. Fields the registry has no data for
/// come back as null.
#[derive(Debug, Clone, Deserialize)]
pub struct GtfsStop {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Configuration for the GTFS registry client.
#[derive(Debug, Clone)]
pub struct GtfsConfig {
    /// Base URL for the API (defaults to production Stride).
    pub base_url: String,
    /// Request timeout in seconds. The whole stop lookup must fit in the
    /// 8-second enrichment budget.
    pub timeout_secs: u64,
}

impl GtfsConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 8,
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

impl Default for GtfsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Stride GTFS stops API.
#[derive(Debug, Clone)]
pub struct GtfsClient {
    http: reqwest::Client,
    base_url: String,
}

impl GtfsClient {
    /// Create a new GTFS client.
    pub fn new(config: GtfsConfig) -> Result<Self, GtfsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// List all registered stops in a city.
    pub async fn stops_in_city(&self, city: &str) -> Result<Vec<GtfsStop>, GtfsError> {
        let url = format!("{}/gtfs_stops/list", self.base_url);
        let date = service_date(Local::now().date_naive())
            .format("%Y-%m-%d")
            .to_string();
        let limit = STOP_LIMIT.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("city", city),
                ("date_from", date.as_str()),
                ("date_to", date.as_str()),
                ("get_count", "false"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GtfsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| GtfsError::Json {
            message: e.to_string(),
        })
    }
}

/// The most recent Thursday strictly before `today`.
///
/// If today is a Thursday, go back a full week: today's registry load
/// may not be complete yet.
pub fn service_date(today: NaiveDate) -> NaiveDate {
    let weekday = today.weekday().num_days_from_monday() as i64; // Mon = 0, Thu = 3
    let days_back = match weekday {
        3 => 7,
        d if d > 3 => d - 3,
        d => d + 4,
    };
    today - chrono::Duration::days(days_back)
}
