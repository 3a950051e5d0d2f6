//! Application state for the web layer.

use std::sync::Arc;

use crate::directions::DirectionsClient;
use crate::gtfs::GtfsClient;
use crate::places::PlacesClient;
use crate::realtime::CurlbusClient;

/// Shared application state.
///
/// Holds the collaborator clients and the route bound. All clients are
/// stateless between requests; sharing them only reuses connection
/// pools.
#[derive(Clone)]
pub struct AppState {
    /// Directions (Google Routes) client
    pub directions: Arc<DirectionsClient>,

    /// Places client (origin city resolution)
    pub places: Arc<PlacesClient>,

    /// GTFS stop registry client
    pub gtfs: Arc<GtfsClient>,

    /// Live-arrivals (curlbus) client
    pub curlbus: Arc<CurlbusClient>,

    /// Bound on routes processed per request
    pub max_routes: usize,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        directions: DirectionsClient,
        places: PlacesClient,
        gtfs: GtfsClient,
        curlbus: CurlbusClient,
        max_routes: usize,
    ) -> Self {
        Self {
            directions: Arc::new(directions),
            places: Arc::new(places),
            gtfs: Arc::new(gtfs),
            curlbus: Arc::new(curlbus),
            max_routes,
        }
    }
}
