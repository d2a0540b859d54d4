//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from the scan's own contract errors.

use super::{StopId, Time};

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A connection that arrives before it departs
    #[error("connection {from} -> {to} arrives at {arrival}, before its departure at {departure}")]
    ArrivalBeforeDeparture {
        from: StopId,
        to: StopId,
        departure: Time,
        arrival: Time,
    },

    /// A footpath edge whose distance is not a finite, non-negative number
    #[error("footpath {a} -- {b} has invalid distance {distance}")]
    InvalidWalkDistance { a: StopId, b: StopId, distance: f64 },
}
