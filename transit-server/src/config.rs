//! Process configuration.
//!
//! Built once at startup from the environment and passed down
//! explicitly; nothing reads the environment at request time.

/// Default bound on processed routes per request.
const DEFAULT_MAX_ROUTES: usize = 2;

/// Configuration errors detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The Google API credential is missing
    #[error("GOOGLE_API_KEY environment variable is required")]
    MissingApiKey,

    /// MAX_ROUTES is set but not a valid count
    #[error("invalid MAX_ROUTES value: {value}")]
    InvalidMaxRoutes { value: String },
}

/// Process-wide configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API credential for the directions and places collaborators.
    pub google_api_key: String,

    /// Bound on routes processed and returned per request. The primary
    /// latency control: every retained route costs one stop lookup and
    /// one realtime lookup.
    pub max_routes: usize,
}

impl AppConfig {
    /// Build the configuration from the environment.
    ///
    /// `GOOGLE_API_KEY` is required; `MAX_ROUTES` is optional and
    /// defaults to 2.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("GOOGLE_API_KEY").ok(),
            std::env::var("MAX_ROUTES").ok(),
        )
    }

    /// Build from already-read variable values (separated out so tests
    /// do not mutate the process environment).
    fn from_vars(api_key: Option<String>, max_routes: Option<String>) -> Result<Self, ConfigError> {
        let google_api_key = match api_key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(ConfigError::MissingApiKey),
        };

        let max_routes = match max_routes {
            None => DEFAULT_MAX_ROUTES,
            Some(value) => value
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidMaxRoutes {
                    value: value.clone(),
                })?,
        };

        Ok(Self {
            google_api_key,
            max_routes,
        })
    }
}
