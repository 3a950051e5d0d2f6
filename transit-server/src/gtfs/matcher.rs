//! Stop matching: human-readable stop descriptions → GTFS stop codes.
//!
//! The directions provider describes stops in prose ("תחנה מרכזית/קומה
//! 3/רציף 16"); the GTFS registry has its own canonical naming. The two
//! rarely match verbatim, so matching is by token overlap after
//! normalization, and an unmatched stop is a normal outcome, not an
//! error.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::{StopCandidate, StopCode};

use super::client::{GtfsClient, GtfsStop};
use super::error::GtfsError;

/// Source of registered stops for a city.
///
/// This abstraction allows the matcher and enricher to be tested with
/// in-memory stop lists.
#[async_trait]
pub trait StopDirectory: Send + Sync {
    /// List all registered stops in a city.
    async fn stops_in_city(&self, city: &str) -> Result<Vec<GtfsStop>, GtfsError>;
}

#[async_trait]
impl StopDirectory for GtfsClient {
    async fn stops_in_city(&self, city: &str) -> Result<Vec<GtfsStop>, GtfsError> {
        GtfsClient::stops_in_city(self, city).await
    }
}

/// Resolves stop descriptions to GTFS stop codes within one city.
pub struct StopMatcher<'a, D: StopDirectory> {
    directory: &'a D,
}

impl<'a, D: StopDirectory> StopMatcher<'a, D> {
    /// Create a matcher over a stop directory.
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// Find the best-matching registered stop for a stop description.
    ///
    /// Returns `None` both when nothing matches and when the directory
    /// is unavailable — either way the caller proceeds without realtime
    /// data. Deterministic: identical inputs select identical stops.
    pub async fn resolve(&self, city: &str, stop_description: &str) -> Option<StopCandidate> {
        let station = station_segment(stop_description);
        let target = tokens(&normalize(station));
        if target.is_empty() {
            return None;
        }

        let stops = match self.directory.stops_in_city(city).await {
            Ok(stops) => stops,
            Err(e) => {
                warn!(city, error = %e, "stop directory lookup failed");
                return None;
            }
        };

        let candidate = select_best(&stops, &target, city);
        match &candidate {
            Some(c) => debug!(stop = %c.stop_code, name = %c.stop_name, "matched stop"),
            None => debug!(city, station, "no matching stop"),
        }
        candidate
    }
}

/// Extract the canonical station-name segment of a composite stop
/// description: everything before the first `/`.
///
/// Directions descriptions append platform and floor segments
/// ("Central Station/Floor 3/Platform 16") that never appear in GTFS
/// naming.
pub fn station_segment(description: &str) -> &str {
    description.split('/').next().unwrap_or("").trim()
}

/// Normalize a name for comparison: trim, lowercase, and strip Hebrew
/// pointing marks (niqqud and cantillation, U+0591–U+05C7).
pub fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !('\u{0591}'..='\u{05C7}').contains(c))
        .collect()
}

/// Split a normalized name into comparison tokens, dropping punctuation
/// at token edges.
fn tokens(normalized: &str) -> HashSet<String> {
    normalized
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Select the stop with the highest token overlap against the target.
///
/// Ties break by shortest normalized name (exact names beat composite
/// ones), then by lexicographic stop code, so the result never depends
/// on registry ordering.
fn select_best(stops: &[GtfsStop], target: &HashSet<String>, city: &str) -> Option<StopCandidate> {
    let mut best: Option<(usize, usize, StopCandidate)> = None;

    for stop in stops {
        let Some(name) = stop.name.as_deref() else {
            continue;
        };
        let Some(code) = stop.code else {
            continue;
        };
        let Ok(stop_code) = StopCode::parse(&code.to_string()) else {
            continue;
        };

        let normalized = normalize(name);
        let score = tokens(&normalized)
            .intersection(target)
            .count();
        if score == 0 {
            continue;
        }

        let candidate = StopCandidate {
            stop_code,
            stop_name: name.to_string(),
            city: stop.city.clone().unwrap_or_else(|| city.to_string()),
        };
        let name_len = normalized.chars().count();

        let better = match &best {
            None => true,
            Some((best_score, best_len, best_candidate)) => {
                score > *best_score
                    || (score == *best_score && name_len < *best_len)
                    || (score == *best_score
                        && name_len == *best_len
                        && candidate.stop_code < best_candidate.stop_code)
            }
        };

        if better {
            best = Some((score, name_len, candidate));
        }
    }

    best.map(|(_, _, candidate)| candidate)
}
