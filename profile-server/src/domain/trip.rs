//! Trip identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A trip: one physical vehicle run.
///
/// Consecutive connections sharing a `TripId` are successive hops of the
/// same vehicle; staying aboard between them costs no transfer margin.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TripId(pub u32);

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({})", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
