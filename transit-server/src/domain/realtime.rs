//! Live arrival estimates attached to transit steps.

use serde::Serialize;

/// Outcome of a realtime lookup for one step.
///
/// `NoData` and `Error` are recorded explicitly rather than omitting the
/// field, so callers can tell "no live data available" apart from "not
/// attempted".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RealtimeStatus {
    /// At least one live arrival matched the expected line.
    Success,

    /// The stop responded but no arrival matched the expected line.
    NoData,

    /// The realtime collaborator failed or timed out.
    Error,
}

/// Live arrival estimates for a specific stop and line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RealtimeInfo {
    /// Upcoming arrivals, soonest first. Entries are duration strings
    /// ("now", "13 min") or wall-clock times ("14:32").
    pub arrivals: Vec<String>,

    /// The soonest arrival, if any.
    pub next_arrival: Option<String>,

    /// Lookup outcome.
    pub status: RealtimeStatus,
}

impl RealtimeInfo {
    /// Build from a filtered, time-ordered arrival list. An empty list
    /// means the stop responded without a matching line.
    pub fn from_arrivals(arrivals: Vec<String>) -> Self {
        let next_arrival = arrivals.first().cloned();
        let status = if arrivals.is_empty() {
            RealtimeStatus::NoData
        } else {
            RealtimeStatus::Success
        };

        Self {
            arrivals,
            next_arrival,
            status,
        }
    }

    /// The realtime collaborator failed or timed out.
    pub fn unavailable() -> Self {
        Self {
            arrivals: Vec::new(),
            next_arrival: None,
            status: RealtimeStatus::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&RealtimeStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&RealtimeStatus::NoData).unwrap(),
            "\"no_data\""
        );
        assert_eq!(
            serde_json::to_string(&RealtimeStatus::Error).unwrap(),
            "\"error\""
        );
    }

    #[test]
    fn from_arrivals_success() {
        let info =
            RealtimeInfo::from_arrivals(vec!["13 min".to_string(), "28 min".to_string()]);
        assert_eq!(info.status, RealtimeStatus::Success);
        assert_eq!(info.next_arrival.as_deref(), Some("13 min"));
        assert_eq!(info.arrivals.len(), 2);
    }

    #[test]
    fn from_arrivals_empty_is_no_data() {
        let info = RealtimeInfo::from_arrivals(Vec::new());
        assert_eq!(info.status, RealtimeStatus::NoData);
        assert_eq!(info.next_arrival, None);
        assert!(info.arrivals.is_empty());
    }

    #[test]
    fn unavailable_is_error() {
        let info = RealtimeInfo::unavailable();
        assert_eq!(info.status, RealtimeStatus::Error);
        assert!(info.arrivals.is_empty());
    }
}
