//! Web layer for the transit route server.
//!
//! A single JSON operation: `GET /route?origin=…&destination=…` returns
//! the enriched itinerary, plus a health check.

mod dto;
mod routes;
mod state;

pub use dto::{ErrorResponse, RouteRequest};
pub use routes::{AppError, create_router};
pub use state::AppState;
