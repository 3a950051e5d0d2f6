//! Live-arrivals feed (curlbus) client, board parser, and fetcher.
//!
//! curlbus aggregates Israeli operators' live arrival estimates per GTFS
//! stop code. Lookups here run under a 3-second budget and every failure
//! mode is non-fatal: the outcome is recorded in the step's
//! `real_time_data.status` instead of failing the itinerary.

mod client;
mod error;
mod fetcher;
mod parse;

pub use client::{CurlbusClient, CurlbusConfig};
pub use error::RealtimeError;
pub use fetcher::{ArrivalBoard, RealtimeFetcher};
pub use parse::{normalize_line, parse_board};
