//! GTFS stop registry client and stop matcher.
//!
//! Resolves the human-readable stop names the directions provider emits
//! to concrete GTFS stop codes, via the Open Bus Stride API. This is the
//! non-trivial half of the correlation pipeline: Hebrew stop-name
//! variants are common and an unmatched stop is an expected outcome.

mod client;
mod error;
mod matcher;

pub use client::{GtfsClient, GtfsConfig, GtfsStop, service_date};
pub use error::GtfsError;
pub use matcher::{StopDirectory, StopMatcher, normalize, station_segment};
