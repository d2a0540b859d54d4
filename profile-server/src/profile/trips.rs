//! Same-trip continuation tracking.

use std::collections::HashMap;

use crate::domain::{Arrival, Time, TripId};

/// Best known arrival at the target for a passenger who stays aboard each
/// trip past the connection currently being scanned.
///
/// Staying aboard is not a transfer, so these arrivals carry no transfer
/// margin. Entries default to unreachable, only ever improve, and live for
/// one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripArrivals {
    best: HashMap<TripId, Time>,
}

impl TripArrivals {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current best arrival for a trip, defaulting to unreachable.
    pub fn best_known(&self, trip: TripId) -> Arrival {
        match self.best.get(&trip) {
            Some(&t) => Arrival::At(t),
            None => Arrival::Unreachable,
        }
    }

    /// Record `arrival` for `trip` if it is strictly better than the
    /// current entry.
    pub fn improve(&mut self, trip: TripId, arrival: Time) {
        match self.best.get_mut(&trip) {
            Some(best) => {
                if arrival < *best {
                    *best = arrival;
                }
            }
            None => {
                self.best.insert(trip, arrival);
            }
        }
    }
}
