//! Itinerary model: routes and transit steps.

use serde::Serialize;

use super::realtime::RealtimeInfo;

/// One transit step of a route: a single ride on one line between two
/// named stops.
///
/// All fields except `real_time_data` come verbatim from the directions
/// provider and are never modified afterwards. `real_time_data` is
/// attached by the route enricher, and only ever on the first transit
/// step of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitStep {
    /// Operating agency name (e.g. "אגד").
    pub operator: String,

    /// Line number as published by the operator (e.g. "405").
    pub route_number: String,

    /// Departure stop name as returned by the directions provider.
    /// Often a composite "station/platform/floor" description.
    pub departure_stop: String,

    /// Arrival stop name.
    pub arrival_stop: String,

    /// Scheduled departure time, "HH:MM" local time.
    pub departure_time: String,

    /// Scheduled arrival time, "HH:MM" local time.
    pub arrival_time: String,

    /// Live arrival estimate for this step, if one was resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_time_data: Option<RealtimeInfo>,
}

/// One complete point-to-point itinerary option: an ordered sequence of
/// transit steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route {
    /// Transit steps in travel order.
    pub steps: Vec<TransitStep>,
}

impl Route {
    /// Create a route from its steps.
    pub fn new(steps: Vec<TransitStep>) -> Self {
        Self { steps }
    }

    /// Whether the route contains no transit steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// The full set of itinerary options for one request, in the order the
/// directions provider returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    /// Retained routes, at most `max_routes` of them.
    pub routes: Vec<Route>,
}

impl Itinerary {
    /// Create an itinerary from routes.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// An itinerary with no routes.
    pub fn empty() -> Self {
        Self::default()
    }
}
