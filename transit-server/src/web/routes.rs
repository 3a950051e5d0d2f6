//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::info;

use crate::directions::DirectionsError;
use crate::domain::Itinerary;
use crate::enrich::{EnrichError, RouteEnricher};

use super::dto::{ErrorResponse, RouteRequest};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route", get(get_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Compute real-time transit routes between two addresses.
async fn get_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<Itinerary>, AppError> {
    if req.origin.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "origin must not be empty".to_string(),
        });
    }
    if req.destination.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "destination must not be empty".to_string(),
        });
    }

    let result = state
        .directions
        .compute_routes(&req.origin, &req.destination)
        .await?;

    let enricher = RouteEnricher::new(
        &*state.places,
        &*state.gtfs,
        &*state.curlbus,
        state.max_routes,
    );
    let itinerary = enricher
        .enrich(result.routes, result.origin_place_id.as_deref())
        .await?;

    info!(
        origin = %req.origin,
        destination = %req.destination,
        routes = itinerary.routes.len(),
        "served route request"
    );

    Ok(Json(itinerary))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The caller's request was invalid (400)
    BadRequest { message: String },

    /// A mandatory upstream collaborator failed (502)
    Upstream { message: String },

    /// Anything else (500)
    Internal { message: String },
}

impl From<DirectionsError> for AppError {
    fn from(e: DirectionsError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl From<EnrichError> for AppError {
    fn from(e: EnrichError) -> Self {
        // Both variants mean a mandatory collaborator let us down:
        // either the directions response was malformed or places failed
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::error!(%status, message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
