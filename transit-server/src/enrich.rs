//! Route enrichment: the correlation pipeline.
//!
//! Takes the directions provider's itinerary, resolves the origin city
//! once, and for the first transit step of each retained route resolves
//! a GTFS stop code and overlays a live arrival estimate. Enrichment
//! failures are absorbed per route; only city resolution is fatal.
//!
//! The first-step-only rule is a deliberate latency/cost trade-off: it
//! caps external calls at one stop lookup plus one realtime lookup per
//! route, and the wait for the first ride is the decision-relevant one.

use async_trait::async_trait;
use futures::future::join_all;
use tracing::debug;

use crate::domain::{Itinerary, Route};
use crate::gtfs::{StopDirectory, StopMatcher};
use crate::places::{PlacesClient, PlacesError};
use crate::realtime::{ArrivalBoard, RealtimeFetcher};

/// Errors that abort enrichment, and with it the whole request.
#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    /// The directions response carried no origin place id
    #[error("directions response has no origin place id")]
    MissingOriginPlace,

    /// The places collaborator failed to resolve the origin city
    #[error("failed to resolve origin city: {0}")]
    CityResolution(#[from] PlacesError),
}

/// Resolver of place ids to city names.
///
/// This abstraction allows the enricher to be tested without the places
/// collaborator.
#[async_trait]
pub trait CityResolver: Send + Sync {
    /// Resolve a place id to its city name.
    async fn city_for_place(&self, place_id: &str) -> Result<String, PlacesError>;
}

#[async_trait]
impl CityResolver for PlacesClient {
    async fn city_for_place(&self, place_id: &str) -> Result<String, PlacesError> {
        PlacesClient::city_for_place(self, place_id).await
    }
}

/// Orchestrates stop matching and realtime lookup across an itinerary.
pub struct RouteEnricher<'a, C, D, B>
where
    C: CityResolver,
    D: StopDirectory,
    B: ArrivalBoard,
{
    cities: &'a C,
    stops: &'a D,
    arrivals: &'a B,
    max_routes: usize,
}

impl<'a, C, D, B> RouteEnricher<'a, C, D, B>
where
    C: CityResolver,
    D: StopDirectory,
    B: ArrivalBoard,
{
    /// Create an enricher over the three collaborators.
    pub fn new(cities: &'a C, stops: &'a D, arrivals: &'a B, max_routes: usize) -> Self {
        Self {
            cities,
            stops,
            arrivals,
            max_routes,
        }
    }

    /// Enrich an itinerary with live arrival data.
    ///
    /// Truncates to the first `max_routes` routes before any collaborator
    /// call, resolves the origin city exactly once, then enriches the
    /// retained routes concurrently. A route whose enrichment fails comes
    /// back unenriched; sibling routes are unaffected.
    pub async fn enrich(
        &self,
        routes: Vec<Route>,
        origin_place_id: Option<&str>,
    ) -> Result<Itinerary, EnrichError> {
        let routes = select_routes(routes, self.max_routes);
        if routes.is_empty() {
            return Ok(Itinerary::empty());
        }

        let place_id = origin_place_id.ok_or(EnrichError::MissingOriginPlace)?;
        let city = self.cities.city_for_place(place_id).await?;
        debug!(city, routes = routes.len(), "enriching itinerary");

        let enriched = join_all(
            routes
                .into_iter()
                .map(|route| self.enrich_route(route, &city)),
        )
        .await;

        Ok(Itinerary::new(enriched))
    }

    /// Enrich the first transit step of one route. Infallible: failures
    /// leave the step without realtime data.
    async fn enrich_route(&self, mut route: Route, city: &str) -> Route {
        let Some(first) = route.steps.first_mut() else {
            return route;
        };

        let matcher = StopMatcher::new(self.stops);
        let Some(candidate) = matcher.resolve(city, &first.departure_stop).await else {
            // Stop not resolved: a normal outcome, the step ships as-is
            return route;
        };

        let fetcher = RealtimeFetcher::new(self.arrivals);
        let info = fetcher.fetch(&candidate.stop_code, &first.route_number).await;
        first.real_time_data = Some(info);

        route
    }
}

/// Apply the truncation policy: first `max_routes` routes in provider
/// order, then drop routes with no transit steps.
///
/// Truncation comes first so "first N" means the provider's first N
/// alternatives, even when some of them turn out to be walking-only.
fn select_routes(mut routes: Vec<Route>, max_routes: usize) -> Vec<Route> {
    routes.truncate(max_routes);
    routes.retain(|r| !r.is_empty());
    routes
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::{RealtimeStatus, StopCode, TransitStep};
    use crate::gtfs::{GtfsError, GtfsStop};
    use crate::realtime::RealtimeError;

    fn step(line: &str, departure_stop: &str) -> TransitStep {
        TransitStep {
            operator: "אגד".to_string(),
            route_number: line.to_string(),
            departure_stop: departure_stop.to_string(),
            arrival_stop: "תחנה מרכזית ירושלים".to_string(),
            departure_time: "14:00".to_string(),
            arrival_time: "15:00".to_string(),
            real_time_data: None,
        }
    }

    fn route(lines: &[&str]) -> Route {
        Route::new(
            lines
                .iter()
                .map(|l| step(l, "תחנה מרכזית תל אביב/רציף 6"))
                .collect(),
        )
    }

    struct FakeCities {
        city: &'static str,
        fail: bool,
        calls: AtomicUsize,
    }

    impl FakeCities {
        fn new(city: &'static str) -> Self {
            Self {
                city,
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                city: "",
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CityResolver for FakeCities {
        async fn city_for_place(&self, place_id: &str) -> Result<String, PlacesError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(PlacesError::NoLocality {
                    place_id: place_id.to_string(),
                });
            }
            Ok(self.city.to_string())
        }
    }

    struct FakeStops {
        stops: Vec<GtfsStop>,
        fail: bool,
    }

    impl FakeStops {
        fn with_central_station() -> Self {
            Self {
                stops: vec![GtfsStop {
                    code: Some(20594),
                    name: Some("תחנה מרכזית תל אביב".to_string()),
                    city: Some("תל אביב יפו".to_string()),
                }],
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                stops: Vec::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl StopDirectory for FakeStops {
        async fn stops_in_city(&self, _city: &str) -> Result<Vec<GtfsStop>, GtfsError> {
            if self.fail {
                return Err(GtfsError::Api {
                    status: 503,
                    message: "unavailable".to_string(),
                });
            }
            Ok(self.stops.clone())
        }
    }

    struct FakeArrivals {
        text: Option<&'static str>,
    }

    #[async_trait]
    impl ArrivalBoard for FakeArrivals {
        async fn board(&self, _stop_code: &StopCode) -> Result<String, RealtimeError> {
            match self.text {
                Some(text) => Ok(text.to_string()),
                None => Err(RealtimeError::Api {
                    status: 504,
                    message: "timeout".to_string(),
                }),
            }
        }
    }

    const BOARD_405: &str = "│405│אגד│ירושלים│13 min, 28 min│\n";

    #[tokio::test]
    async fn truncates_to_max_routes_in_order() {
        let cities = FakeCities::new("תל אביב יפו");
        let stops = FakeStops::with_central_station();
        let arrivals = FakeArrivals {
            text: Some(BOARD_405),
        };
        let enricher = RouteEnricher::new(&cities, &stops, &arrivals, 2);

        let itinerary = enricher
            .enrich(
                vec![route(&["405"]), route(&["480"]), route(&["947"])],
                Some("ChIJ123"),
            )
            .await
            .unwrap();

        assert_eq!(itinerary.routes.len(), 2);
        assert_eq!(itinerary.routes[0].steps[0].route_number, "405");
        assert_eq!(itinerary.routes[1].steps[0].route_number, "480");
    }

    #[tokio::test]
    async fn only_first_step_gets_realtime_data() {
        let cities = FakeCities::new("תל אביב יפו");
        let stops = FakeStops::with_central_station();
        let arrivals = FakeArrivals {
            text: Some(BOARD_405),
        };
        let enricher = RouteEnricher::new(&cities, &stops, &arrivals, 2);

        let itinerary = enricher
            .enrich(vec![route(&["405", "18", "61"])], Some("ChIJ123"))
            .await
            .unwrap();

        let steps = &itinerary.routes[0].steps;
        assert!(steps[0].real_time_data.is_some());
        assert!(steps[1].real_time_data.is_none());
        assert!(steps[2].real_time_data.is_none());
    }

    #[tokio::test]
    async fn city_is_resolved_exactly_once() {
        let cities = FakeCities::new("תל אביב יפו");
        let stops = FakeStops::with_central_station();
        let arrivals = FakeArrivals {
            text: Some(BOARD_405),
        };
        let enricher = RouteEnricher::new(&cities, &stops, &arrivals, 3);

        enricher
            .enrich(
                vec![route(&["405"]), route(&["480"]), route(&["947"])],
                Some("ChIJ123"),
            )
            .await
            .unwrap();

        assert_eq!(cities.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stop_lookup_failure_is_isolated() {
        let cities = FakeCities::new("תל אביב יפו");
        let stops = FakeStops::failing();
        let arrivals = FakeArrivals {
            text: Some(BOARD_405),
        };
        let enricher = RouteEnricher::new(&cities, &stops, &arrivals, 2);

        let itinerary = enricher
            .enrich(vec![route(&["405"]), route(&["480"])], Some("ChIJ123"))
            .await
            .unwrap();

        // Both routes survive, neither carries realtime data
        assert_eq!(itinerary.routes.len(), 2);
        for r in &itinerary.routes {
            assert!(r.steps[0].real_time_data.is_none());
        }
    }

    #[tokio::test]
    async fn realtime_failure_records_error_status() {
        let cities = FakeCities::new("תל אביב יפו");
        let stops = FakeStops::with_central_station();
        let arrivals = FakeArrivals { text: None };
        let enricher = RouteEnricher::new(&cities, &stops, &arrivals, 2);

        let itinerary = enricher
            .enrich(vec![route(&["405"])], Some("ChIJ123"))
            .await
            .unwrap();

        let info = itinerary.routes[0].steps[0].real_time_data.as_ref().unwrap();
        assert_eq!(info.status, RealtimeStatus::Error);
    }

    #[tokio::test]
    async fn wrong_line_on_board_is_no_data() {
        let cities = FakeCities::new("תל אביב יפו");
        let stops = FakeStops::with_central_station();
        let arrivals = FakeArrivals {
            text: Some("│480│אגד│עזריאלי│5 min│\n"),
        };
        let enricher = RouteEnricher::new(&cities, &stops, &arrivals, 2);

        let itinerary = enricher
            .enrich(vec![route(&["405"])], Some("ChIJ123"))
            .await
            .unwrap();

        let info = itinerary.routes[0].steps[0].real_time_data.as_ref().unwrap();
        assert_eq!(info.status, RealtimeStatus::NoData);
    }

    #[tokio::test]
    async fn empty_itinerary_skips_city_resolution() {
        let cities = FakeCities::new("תל אביב יפו");
        let stops = FakeStops::with_central_station();
        let arrivals = FakeArrivals {
            text: Some(BOARD_405),
        };
        let enricher = RouteEnricher::new(&cities, &stops, &arrivals, 2);

        let itinerary = enricher
            .enrich(vec![Route::default()], Some("ChIJ123"))
            .await
            .unwrap();

        assert!(itinerary.routes.is_empty());
        assert_eq!(cities.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn transit_less_route_beyond_cutoff_stays_dropped() {
        let cities = FakeCities::new("תל אביב יפו");
        let stops = FakeStops::with_central_station();
        let arrivals = FakeArrivals {
            text: Some(BOARD_405),
        };
        let enricher = RouteEnricher::new(&cities, &stops, &arrivals, 2);

        // Walking-only route occupies position 1; the transit route at
        // position 2 is beyond the cutoff and must not slide in
        let itinerary = enricher
            .enrich(
                vec![route(&["405"]), Route::default(), route(&["947"])],
                Some("ChIJ123"),
            )
            .await
            .unwrap();

        assert_eq!(itinerary.routes.len(), 1);
        assert_eq!(itinerary.routes[0].steps[0].route_number, "405");
    }

    #[tokio::test]
    async fn missing_place_id_is_fatal() {
        let cities = FakeCities::new("תל אביב יפו");
        let stops = FakeStops::with_central_station();
        let arrivals = FakeArrivals {
            text: Some(BOARD_405),
        };
        let enricher = RouteEnricher::new(&cities, &stops, &arrivals, 2);

        let result = enricher.enrich(vec![route(&["405"])], None).await;
        assert!(matches!(result, Err(EnrichError::MissingOriginPlace)));
    }

    #[tokio::test]
    async fn city_resolution_failure_is_fatal() {
        let cities = FakeCities::failing();
        let stops = FakeStops::with_central_station();
        let arrivals = FakeArrivals {
            text: Some(BOARD_405),
        };
        let enricher = RouteEnricher::new(&cities, &stops, &arrivals, 2);

        let result = enricher.enrich(vec![route(&["405"])], Some("ChIJ123")).await;
        assert!(matches!(result, Err(EnrichError::CityResolution(_))));
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::select_routes;
    use crate::domain::{Route, TransitStep};

    fn step(line: String) -> TransitStep {
        TransitStep {
            operator: String::new(),
            route_number: line,
            departure_stop: String::new(),
            arrival_stop: String::new(),
            departure_time: String::new(),
            arrival_time: String::new(),
            real_time_data: None,
        }
    }

    /// Routes with 0-3 steps each; the route number encodes the
    /// original position so ordering can be checked after selection.
    fn routes_strategy() -> impl Strategy<Value = Vec<Route>> {
        prop::collection::vec(0usize..4, 0..10).prop_map(|sizes| {
            sizes
                .into_iter()
                .enumerate()
                .map(|(position, size)| {
                    Route::new((0..size).map(|_| step(position.to_string())).collect())
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn selection_never_exceeds_max_routes(
            routes in routes_strategy(),
            max_routes in 0usize..5,
        ) {
            let selected = select_routes(routes, max_routes);
            prop_assert!(selected.len() <= max_routes);
        }

        #[test]
        fn selection_preserves_provider_order(
            routes in routes_strategy(),
            max_routes in 0usize..5,
        ) {
            let selected = select_routes(routes, max_routes);

            let positions: Vec<usize> = selected
                .iter()
                .map(|r| r.steps[0].route_number.parse().unwrap())
                .collect();

            for window in positions.windows(2) {
                prop_assert!(window[0] < window[1]);
            }
            // Truncation happens before the transit-step filter, so no
            // selected route may come from beyond the cutoff
            for p in &positions {
                prop_assert!(*p < max_routes);
            }
        }

        #[test]
        fn selection_drops_empty_routes(
            routes in routes_strategy(),
            max_routes in 0usize..5,
        ) {
            let selected = select_routes(routes, max_routes);
            prop_assert!(selected.iter().all(|r| !r.is_empty()));
        }
    }
}
