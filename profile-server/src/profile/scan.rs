//! The backward profile scan engine.
//!
//! Processes a connection stream ordered by non-increasing departure time.
//! Scanning a connection asks "departing on this hop, when is the target
//! reached at best?" — either by transferring at the hop's arrival stop
//! (paying the transfer margin) or by staying aboard the same trip (free).
//! A reachable answer becomes a (departure, arrival) candidate for the hop's
//! departure stop, and any frontier improvement is offered to that stop's
//! walkable neighbours.
//!
//! Connections departing later are scanned first, so by the time a
//! connection is processed every frontier it queries already reflects all
//! onward options it could feed into.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Connection, StopId, Time};
use crate::walk::WalkGraph;

use super::config::ProfileConfig;
use super::frontier::{ParetoFrontier, ParetoTuple, StopProfile};
use super::trips::TripArrivals;

/// Error from a profile scan.
///
/// All variants are caller-contract violations; none is recoverable and
/// there is no partial result to fall back to.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScanError {
    /// The connection stream is not sorted by non-increasing departure time
    #[error(
        "connection {index} departs at {departure}, after the previous connection at {previous}"
    )]
    UnsortedConnections {
        index: usize,
        previous: Time,
        departure: Time,
    },

    /// The scan was started a second time on the same instance
    #[error("scan already started; create a fresh instance for another sweep")]
    AlreadyRun,

    /// Results were requested before the scan ran to completion
    #[error("scan has not run to completion; no results are available")]
    NotCompleted,

    /// Walk speed must be a positive, finite number
    #[error("walk speed must be positive, got {0}")]
    InvalidWalkSpeed(f64),

    /// Transfer margin must be non-negative
    #[error("transfer margin must be non-negative, got {0} seconds")]
    NegativeTransferMargin(i64),

    /// The departure window ends before it starts
    #[error("time window ends at {end}, before it starts at {start}")]
    InvalidWindow { start: Time, end: Time },
}

/// The departure-time window of a scan.
///
/// Connections departing outside the window are skipped; both bounds are
/// inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Earliest departure considered.
    pub start: Time,
    /// Latest departure considered.
    pub end: Time,
}

impl TimeWindow {
    /// Create a window; bounds are inclusive.
    pub fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    /// A window admitting every representable departure.
    pub fn unbounded() -> Self {
        Self {
            start: Time::from_secs(i64::MIN),
            end: Time::from_secs(i64::MAX),
        }
    }

    /// True if `t` lies within the window.
    pub fn contains(&self, t: Time) -> bool {
        self.start <= t && t <= self.end
    }
}

/// One profile scan: a single backward sweep computing the Pareto frontier
/// of (departure, arrival) pairs towards one fixed target stop.
///
/// An instance runs exactly once. Build it, call [`run`](Self::run), then
/// read the frontiers; running again or reading before completion is an
/// error.
///
/// # Examples
///
/// ```
/// use profile_server::domain::{Connection, StopId, Time, TripId};
/// use profile_server::profile::{ProfileConfig, ProfileScan, TimeWindow};
/// use profile_server::walk::WalkGraph;
///
/// let t = |s| Time::from_secs(s);
/// let connections =
///     vec![Connection::new(StopId(1), StopId(2), t(10), t(15), TripId(1)).unwrap()];
/// let walk_graph = WalkGraph::new();
/// let config = ProfileConfig::new(0, 1.4);
///
/// let mut scan = ProfileScan::new(
///     &connections,
///     StopId(2),
///     TimeWindow::unbounded(),
///     config,
///     &walk_graph,
/// )
/// .unwrap();
/// scan.run().unwrap();
///
/// let frontier = scan.frontier(StopId(1)).unwrap().unwrap();
/// assert_eq!(frontier.tuples()[0].departure, t(10));
/// assert_eq!(frontier.tuples()[0].arrival, t(15));
/// ```
pub struct ProfileScan<'a> {
    /// Sorted by non-increasing departure time (validated during the run).
    connections: &'a [Connection],
    walk_graph: &'a WalkGraph,
    config: ProfileConfig,
    target: StopId,
    window: TimeWindow,

    profiles: HashMap<StopId, StopProfile>,
    trip_arrivals: TripArrivals,
    started: bool,
    completed: bool,
}

impl<'a> ProfileScan<'a> {
    /// Create a scan over the given network.
    ///
    /// `connections` must be sorted by non-increasing departure time; this
    /// is checked during [`run`](Self::run), not here. The walk speed and
    /// transfer margin are validated immediately.
    pub fn new(
        connections: &'a [Connection],
        target: StopId,
        window: TimeWindow,
        config: ProfileConfig,
        walk_graph: &'a WalkGraph,
    ) -> Result<Self, ScanError> {
        if !(config.walk_speed > 0.0 && config.walk_speed.is_finite()) {
            return Err(ScanError::InvalidWalkSpeed(config.walk_speed));
        }
        if config.transfer_margin_secs < 0 {
            return Err(ScanError::NegativeTransferMargin(config.transfer_margin_secs));
        }
        if window.end < window.start {
            return Err(ScanError::InvalidWindow {
                start: window.start,
                end: window.end,
            });
        }

        let mut profiles = HashMap::new();
        profiles.insert(target, StopProfile::Target);

        Ok(Self {
            connections,
            walk_graph,
            config,
            target,
            window,
            profiles,
            trip_arrivals: TripArrivals::new(),
            started: false,
            completed: false,
        })
    }

    /// Run the sweep.
    ///
    /// Fails on the first out-of-order connection; an instance whose run
    /// started (successfully or not) cannot be run again.
    pub fn run(&mut self) -> Result<(), ScanError> {
        if self.started {
            return Err(ScanError::AlreadyRun);
        }
        self.started = true;

        debug!(
            connections = self.connections.len(),
            target = %self.target,
            "starting profile scan"
        );

        let connections = self.connections;
        let mut latest_departure: Option<Time> = None;
        for (index, connection) in connections.iter().enumerate() {
            if let Some(previous) = latest_departure {
                if connection.departure > previous {
                    return Err(ScanError::UnsortedConnections {
                        index,
                        previous,
                        departure: connection.departure,
                    });
                }
            }
            latest_departure = Some(connection.departure);

            if !self.window.contains(connection.departure) {
                continue;
            }

            self.scan_connection(connection);
        }

        self.completed = true;
        debug!(stops = self.profiles.len(), "profile scan complete");
        Ok(())
    }

    /// Process one connection: query both ways of reaching the target,
    /// update the trip tracker, merge at the departure stop, propagate.
    fn scan_connection(&mut self, connection: &Connection) {
        // Transferring at the arrival stop costs the margin...
        let earliest_transfer = connection.arrival + self.config.transfer_margin();
        let transfer_arrival = self
            .profile_mut(connection.to)
            .best_arrival_after(earliest_transfer);

        // ...staying aboard the same trip does not.
        let trip_arrival = self.trip_arrivals.best_known(connection.trip);

        let best_arrival = transfer_arrival.min(trip_arrival);
        let Some(best_time) = best_arrival.time() else {
            // This hop leads nowhere useful yet. An earlier hop of the same
            // trip may still pick it up through the tracker later.
            return;
        };

        // The transfer path won: earlier hops of this trip inherit it.
        if trip_arrival > best_arrival {
            self.trip_arrivals.improve(connection.trip, best_time);
        }

        let candidate = ParetoTuple::new(connection.departure, best_time);
        if self.profile_mut(connection.from).merge(candidate) {
            self.propagate_footpaths(connection.from, candidate);
        }
    }

    /// Offer a freshly merged tuple to every walkable neighbour, shifted
    /// earlier by the walking time.
    ///
    /// One hop only: chains of footpaths emerge from later scan steps, not
    /// from recursion here.
    fn propagate_footpaths(&mut self, stop: StopId, tuple: ParetoTuple) {
        let graph = self.walk_graph;
        for &(neighbor, distance) in graph.neighbors(stop) {
            let walk = self.config.walk_time(distance);
            let candidate = ParetoTuple::new(tuple.departure - walk, tuple.arrival);
            self.profile_mut(neighbor).merge(candidate);
        }
    }

    /// Get-or-create the profile for a stop; absent stops start with an
    /// explicit empty frontier, meaning "unreachable".
    fn profile_mut(&mut self, stop: StopId) -> &mut StopProfile {
        self.profiles.entry(stop).or_insert_with(StopProfile::empty)
    }

    /// The per-stop profiles after a completed sweep.
    ///
    /// Covers every stop referenced during the sweep, including the target
    /// (as [`StopProfile::Target`]) and stops whose frontier stayed empty.
    pub fn stop_profiles(&self) -> Result<&HashMap<StopId, StopProfile>, ScanError> {
        if !self.completed {
            return Err(ScanError::NotCompleted);
        }
        Ok(&self.profiles)
    }

    /// The frontier of one stop after a completed sweep.
    ///
    /// `None` for a stop the sweep never referenced and for the target,
    /// which carries no frontier.
    pub fn frontier(&self, stop: StopId) -> Result<Option<&ParetoFrontier>, ScanError> {
        Ok(self.stop_profiles()?.get(&stop).and_then(StopProfile::frontier))
    }

    /// The target stop this scan computes profiles towards.
    pub fn target(&self) -> StopId {
        self.target
    }
}
