//! Google Places client: place id → origin city.
//!
//! The origin city is resolved once per request and reused for every
//! stop lookup, since all of a request's routes share the same origin.

mod client;
mod error;

pub use client::{PlacesClient, PlacesConfig};
pub use error::PlacesError;
