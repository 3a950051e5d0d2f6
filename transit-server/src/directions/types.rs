//! Wire types for the Google Routes `computeRoutes` response.
//!
//! The field mask we send restricts the response to
//! `routes.legs.steps.transitDetails` and `geocodingResults`, so only
//! those subtrees are modelled. Every field is optional or defaulted:
//! the provider freely omits anything it has no data for, and a missing
//! field must degrade that step, not fail the decode.

use serde::Deserialize;

/// Top-level `computeRoutes` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesResponse {
    #[serde(default)]
    pub routes: Vec<RawRoute>,
    #[serde(default)]
    pub geocoding_results: Option<GeocodingResults>,
}

/// Geocoding results for the request endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodingResults {
    #[serde(default)]
    pub origin: Option<GeocodedWaypoint>,
}

/// A geocoded endpoint; we only need the place id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodedWaypoint {
    #[serde(default)]
    pub place_id: Option<String>,
}

/// One alternative route.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRoute {
    #[serde(default)]
    pub legs: Vec<RawLeg>,
}

/// One leg of a route.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLeg {
    #[serde(default)]
    pub steps: Vec<RawStep>,
}

/// One step of a leg. Walking steps have no `transitDetails`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStep {
    #[serde(default)]
    pub transit_details: Option<RawTransitDetails>,
}

/// Transit details for a transit step.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransitDetails {
    #[serde(default)]
    pub transit_line: Option<RawTransitLine>,
    #[serde(default)]
    pub stop_details: Option<RawStopDetails>,
    #[serde(default)]
    pub localized_values: Option<RawLocalizedValues>,
}

/// The line serving a transit step.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransitLine {
    #[serde(default)]
    pub agencies: Vec<RawAgency>,
    #[serde(default)]
    pub name_short: Option<String>,
}

/// An operating agency.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAgency {
    #[serde(default)]
    pub name: Option<String>,
}

/// Stops and ISO timestamps for a transit step.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStopDetails {
    #[serde(default)]
    pub departure_stop: Option<RawStop>,
    #[serde(default)]
    pub arrival_stop: Option<RawStop>,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub arrival_time: Option<String>,
}

/// A named stop.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStop {
    #[serde(default)]
    pub name: Option<String>,
}

/// Locale-formatted display values for a transit step.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocalizedValues {
    #[serde(default)]
    pub departure_time: Option<RawLocalizedTime>,
    #[serde(default)]
    pub arrival_time: Option<RawLocalizedTime>,
}

/// A localized timestamp.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocalizedTime {
    #[serde(default)]
    pub time: Option<RawLocalizedText>,
}

/// A localized text value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocalizedText {
    #[serde(default)]
    pub text: Option<String>,
}
