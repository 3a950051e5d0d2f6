//! Core domain types for the transit route server.
//!
//! Everything here is request-scoped: an itinerary is built from one
//! directions response, enriched, serialized, and dropped. No type in
//! this module holds cross-request state.

mod realtime;
mod step;
mod stop;

pub use realtime::{RealtimeInfo, RealtimeStatus};
pub use step::{Itinerary, Route, TransitStep};
pub use stop::{InvalidStopCode, StopCandidate, StopCode};
