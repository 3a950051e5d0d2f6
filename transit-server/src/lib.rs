//! Real-time transit route server for Israel.
//!
//! Answers "how do I get from A to B by public transit right now" by
//! combining a directions provider, a places lookup, the national GTFS
//! stop registry, and the curlbus live-arrivals feed. The heart of the
//! crate is the correlation pipeline in [`enrich`]: directions name
//! stops in prose, GTFS names them canonically, and live arrivals are
//! only addressable by stop code.

pub mod config;
pub mod directions;
pub mod domain;
pub mod enrich;
pub mod gtfs;
pub mod places;
pub mod realtime;
pub mod web;
