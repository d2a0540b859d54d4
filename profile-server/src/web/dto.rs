//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{StopId, Time, TripId};
use crate::profile::ParetoTuple;

/// Request to run a profile scan.
///
/// The whole network travels in the request body: the connection stream
/// (pre-sorted by non-increasing departure time), the footpath edges, the
/// target stop and the departure window. Margin and walk speed fall back to
/// the server defaults when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRequest {
    /// The stop profiles are computed towards.
    pub target: StopId,

    /// Earliest departure considered (epoch seconds, inclusive).
    pub start_time: Time,

    /// Latest departure considered (epoch seconds, inclusive).
    pub end_time: Time,

    /// Transfer margin in seconds; server default when omitted.
    pub transfer_margin_secs: Option<i64>,

    /// Walking speed in metres per second; server default when omitted.
    pub walk_speed: Option<f64>,

    /// Connection stream, sorted by non-increasing departure time.
    pub connections: Vec<ConnectionDto>,

    /// Footpath edges; may be empty.
    #[serde(default)]
    pub walk_edges: Vec<WalkEdgeDto>,
}

/// One connection in the request stream.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ConnectionDto {
    pub from: StopId,
    pub to: StopId,
    pub departure: Time,
    pub arrival: Time,
    pub trip: TripId,
}

/// One undirected footpath edge.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WalkEdgeDto {
    pub a: StopId,
    pub b: StopId,
    pub distance_meters: f64,
}

/// Result of a profile scan.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    /// The target stop of the scan.
    pub target: StopId,

    /// Frontiers for every non-target stop the sweep referenced, ordered
    /// by stop id.
    pub stops: Vec<StopFrontierResult>,
}

/// The final frontier of one stop.
#[derive(Debug, Clone, Serialize)]
pub struct StopFrontierResult {
    pub stop: StopId,

    /// Pareto-optimal options, ordered by increasing departure time.
    /// Empty means the target is unreachable from this stop.
    pub tuples: Vec<ParetoTuple>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
