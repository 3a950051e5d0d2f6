//! GTFS stop code types.

use std::fmt;

/// Error returned when parsing an invalid stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop code: {reason}")]
pub struct InvalidStopCode {
    reason: &'static str,
}

/// A GTFS stop code: the identifier of a physical stop in the national
/// GTFS registry.
///
/// Stop codes are non-empty strings of ASCII digits. This type guarantees
/// that any `StopCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use transit_server::domain::StopCode;
///
/// let code = StopCode::parse("20594").unwrap();
/// assert_eq!(code.as_str(), "20594");
///
/// // Non-digits are rejected
/// assert!(StopCode::parse("20a94").is_err());
///
/// // Empty input is rejected
/// assert!(StopCode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopCode(String);

impl StopCode {
    /// Parse a stop code from a string.
    ///
    /// The input must be a non-empty sequence of ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStopCode> {
        if s.is_empty() {
            return Err(InvalidStopCode {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStopCode {
                reason: "must be ASCII digits 0-9",
            });
        }

        Ok(StopCode(s.to_string()))
    }

    /// Returns the stop code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.0)
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A candidate stop produced by the stop matcher.
///
/// Transient: built while resolving one transit step, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopCandidate {
    /// GTFS stop code of the matched stop.
    pub stop_code: StopCode,

    /// Canonical stop name from the GTFS registry.
    pub stop_name: String,

    /// City the stop belongs to.
    pub city: String,
}
