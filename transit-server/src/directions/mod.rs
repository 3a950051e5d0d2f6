//! Google Routes (directions) client.
//!
//! The directions provider computes the itinerary; this module owns the
//! outbound request shape (Hebrew locale, transit mode, field mask) and
//! the conversion of the provider's leg/step structure into the domain
//! model. It is the mandatory half of the pipeline: if this call fails,
//! the whole request fails.

mod client;
mod convert;
mod error;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::{DirectionsResult, convert_response};
pub use error::DirectionsError;
pub use types::ComputeRoutesResponse;
