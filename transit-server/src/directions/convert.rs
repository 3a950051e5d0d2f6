//! Conversion from the Google Routes wire shape to the domain model.

use crate::domain::{Route, TransitStep};

use super::types::{ComputeRoutesResponse, RawRoute, RawTransitDetails};

/// The directions response reduced to what the pipeline needs.
#[derive(Debug)]
pub struct DirectionsResult {
    /// One `Route` per provider route, position-aligned with the
    /// provider's ordering. Routes whose steps are all non-transit come
    /// through empty; the enricher drops them after truncation so that
    /// "first N routes" means the provider's first N, not ours.
    pub routes: Vec<Route>,

    /// Place id of the geocoded origin, used to resolve the origin city.
    pub origin_place_id: Option<String>,
}

/// Flatten a `computeRoutes` response into the domain model.
pub fn convert_response(response: ComputeRoutesResponse) -> DirectionsResult {
    let origin_place_id = response
        .geocoding_results
        .and_then(|g| g.origin)
        .and_then(|o| o.place_id);

    let routes = response.routes.into_iter().map(convert_route).collect();

    DirectionsResult {
        routes,
        origin_place_id,
    }
}

/// Collect the transit steps of a route, across all its legs, in order.
fn convert_route(route: RawRoute) -> Route {
    let steps = route
        .legs
        .into_iter()
        .flat_map(|leg| leg.steps)
        .filter_map(|step| step.transit_details)
        .map(convert_transit_step)
        .collect();

    Route::new(steps)
}

/// Build a `TransitStep` from the provider's transit details.
///
/// Missing fields become empty strings rather than failing the step; the
/// provider omits fields it has no data for, and a partially-described
/// step is still worth returning.
fn convert_transit_step(details: RawTransitDetails) -> TransitStep {
    let (operator, route_number) = match &details.transit_line {
        Some(line) => {
            let operator = line
                .agencies
                .first()
                .and_then(|a| a.name.clone())
                .unwrap_or_default();
            let route_number = line.name_short.clone().unwrap_or_default();
            (operator, route_number)
        }
        None => (String::new(), String::new()),
    };

    let (departure_stop, arrival_stop) = match &details.stop_details {
        Some(stops) => (
            stops
                .departure_stop
                .as_ref()
                .and_then(|s| s.name.clone())
                .unwrap_or_default(),
            stops
                .arrival_stop
                .as_ref()
                .and_then(|s| s.name.clone())
                .unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    let departure_time = localized_time(&details, |v| v.departure_time.as_ref())
        .or_else(|| {
            details
                .stop_details
                .as_ref()
                .and_then(|s| s.departure_time.clone())
        })
        .unwrap_or_default();

    let arrival_time = localized_time(&details, |v| v.arrival_time.as_ref())
        .or_else(|| {
            details
                .stop_details
                .as_ref()
                .and_then(|s| s.arrival_time.clone())
        })
        .unwrap_or_default();

    TransitStep {
        operator,
        route_number,
        departure_stop,
        arrival_stop,
        departure_time,
        arrival_time,
        real_time_data: None,
    }
}

/// Extract an "HH:MM" display time from `localizedValues`, if present.
fn localized_time<'a>(
    details: &'a RawTransitDetails,
    pick: impl Fn(&'a super::types::RawLocalizedValues) -> Option<&'a super::types::RawLocalizedTime>,
) -> Option<String> {
    details
        .localized_values
        .as_ref()
        .and_then(pick)
        .and_then(|t| t.time.as_ref())
        .and_then(|t| t.text.clone())
}
