//! Per-stop Pareto frontiers.
//!
//! A frontier is the set of non-dominated (departure, arrival) pairs known
//! for one stop. Pair X dominates pair Y when X departs at or after Y and
//! arrives at or before Y, with at least one strict. Leaving later and
//! arriving earlier are both beneficial, so a well-formed frontier sorted by
//! increasing departure has strictly increasing arrivals.

use serde::{Deserialize, Serialize};

use crate::domain::{Arrival, Time};

/// One Pareto-optimal option: depart at `departure`, reach the target at
/// `arrival`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParetoTuple {
    /// Departure instant from this stop.
    pub departure: Time,
    /// Arrival instant at the target.
    pub arrival: Time,
}

impl ParetoTuple {
    /// Create a tuple.
    pub fn new(departure: Time, arrival: Time) -> Self {
        Self { departure, arrival }
    }

    /// True if `self` dominates `other`: departs at or after it, arrives at
    /// or before it, and differs in at least one component.
    pub fn dominates(&self, other: &Self) -> bool {
        self.departure >= other.departure && self.arrival <= other.arrival && self != other
    }
}

/// The non-dominated (departure, arrival) pairs known for one stop.
///
/// Tuples are held sorted by increasing departure; non-domination then
/// forces arrivals to increase as well. The frontier only ever grows or
/// improves during a scan, and owns its tuples exclusively.
///
/// # Examples
///
/// ```
/// use profile_server::domain::{Arrival, Time};
/// use profile_server::profile::{ParetoFrontier, ParetoTuple};
///
/// let t = |s| Time::from_secs(s);
/// let mut frontier = ParetoFrontier::new();
/// assert!(frontier.merge(ParetoTuple::new(t(10), t(30))));
///
/// // Departing earlier for the same arrival is dominated.
/// assert!(!frontier.merge(ParetoTuple::new(t(5), t(30))));
///
/// assert_eq!(frontier.best_arrival_after(t(8)), Arrival::At(t(30)));
/// assert_eq!(frontier.best_arrival_after(t(11)), Arrival::Unreachable);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParetoFrontier {
    /// Sorted by increasing departure time.
    tuples: Vec<ParetoTuple>,
}

impl ParetoFrontier {
    /// Create an empty frontier, meaning "unreachable from here".
    pub fn new() -> Self {
        Self::default()
    }

    /// The smallest arrival among tuples departing at or after `departure`,
    /// or `Unreachable` if there is none.
    pub fn best_arrival_after(&self, departure: Time) -> Arrival {
        // Arrivals increase with departures, so the first tuple departing
        // late enough is also the one arriving earliest.
        let idx = self.tuples.partition_point(|t| t.departure < departure);
        match self.tuples.get(idx) {
            Some(t) => Arrival::At(t.arrival),
            None => Arrival::Unreachable,
        }
    }

    /// Merge a candidate into the frontier.
    ///
    /// The candidate is inserted iff no existing tuple dominates or equals
    /// it; every existing tuple the candidate dominates is removed. Returns
    /// whether the frontier changed, which is the signal for the scan to
    /// propagate further. Merging is idempotent.
    pub fn merge(&mut self, candidate: ParetoTuple) -> bool {
        if self
            .tuples
            .iter()
            .any(|t| *t == candidate || t.dominates(&candidate))
        {
            return false;
        }
        self.tuples.retain(|t| !candidate.dominates(t));
        let idx = self
            .tuples
            .partition_point(|t| t.departure < candidate.departure);
        self.tuples.insert(idx, candidate);
        true
    }

    /// The tuples, sorted by increasing departure time.
    pub fn tuples(&self) -> &[ParetoTuple] {
        &self.tuples
    }

    /// Number of tuples.
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// True if no option is known, i.e. the target is unreachable from
    /// this stop.
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }
}

/// The profile kept for one stop during a scan.
///
/// Every ordinary stop carries a frontier. The target stop instead carries
/// the degenerate `Target` variant: arriving there requires no further
/// travel, so every query answers with the queried time and merges are
/// ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StopProfile {
    /// An ordinary stop's accumulated frontier.
    Frontier(ParetoFrontier),
    /// The target stop: "you have arrived".
    Target,
}

impl StopProfile {
    /// An empty ordinary profile.
    pub fn empty() -> Self {
        StopProfile::Frontier(ParetoFrontier::new())
    }

    /// Best arrival at the target when departing this stop at or after
    /// `departure`.
    pub fn best_arrival_after(&self, departure: Time) -> Arrival {
        match self {
            StopProfile::Frontier(f) => f.best_arrival_after(departure),
            StopProfile::Target => Arrival::At(departure),
        }
    }

    /// Merge a candidate tuple; the target ignores candidates and reports
    /// no change.
    pub fn merge(&mut self, candidate: ParetoTuple) -> bool {
        match self {
            StopProfile::Frontier(f) => f.merge(candidate),
            StopProfile::Target => false,
        }
    }

    /// The underlying frontier for an ordinary stop, `None` for the target.
    pub fn frontier(&self) -> Option<&ParetoFrontier> {
        match self {
            StopProfile::Frontier(f) => Some(f),
            StopProfile::Target => None,
        }
    }
}
