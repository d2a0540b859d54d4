//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::info;

use crate::domain::Connection;
use crate::profile::{ProfileConfig, ProfileScan, StopProfile, TimeWindow};
use crate::walk::WalkGraph;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/profile", post(run_profile))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Application-level errors mapped to HTTP responses.
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let AppError::BadRequest { message } = self;

        // Log errors to stderr for debugging
        eprintln!("[{}] {message}", StatusCode::BAD_REQUEST);

        let body = Json(ErrorResponse { error: message });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Run a profile scan over the network in the request body.
///
/// Every failure here is a caller-contract violation (malformed connection,
/// unsorted stream, bad parameters), so they all map to 400.
async fn run_profile(
    State(state): State<AppState>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let connections: Vec<Connection> = req
        .connections
        .iter()
        .map(|c| Connection::new(c.from, c.to, c.departure, c.arrival, c.trip))
        .collect::<Result<_, _>>()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    let mut walk_graph = WalkGraph::new();
    for edge in &req.walk_edges {
        walk_graph
            .add(edge.a, edge.b, edge.distance_meters)
            .map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?;
    }

    let config = ProfileConfig::new(
        req.transfer_margin_secs
            .unwrap_or(state.defaults.transfer_margin_secs),
        req.walk_speed.unwrap_or(state.defaults.walk_speed),
    );
    let window = TimeWindow::new(req.start_time, req.end_time);

    let mut scan = ProfileScan::new(&connections, req.target, window, config, &walk_graph)
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    scan.run().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    // run() succeeded, so the profiles are available.
    let profiles = scan.stop_profiles().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let mut stops: Vec<StopFrontierResult> = profiles
        .iter()
        .filter_map(|(stop, profile)| match profile {
            StopProfile::Frontier(f) => Some(StopFrontierResult {
                stop: *stop,
                tuples: f.tuples().to_vec(),
            }),
            StopProfile::Target => None,
        })
        .collect();
    stops.sort_by_key(|s| s.stop);

    info!(
        target = %req.target,
        connections = connections.len(),
        stops = stops.len(),
        "profile scan served"
    );

    Ok(Json(ProfileResponse {
        target: req.target,
        stops,
    }))
}
