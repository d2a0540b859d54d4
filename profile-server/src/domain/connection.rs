//! Elementary transit events.

use serde::{Deserialize, Serialize};

use super::{DomainError, StopId, Time, TripId};

/// One scheduled hop between two stops on one trip.
///
/// Connections are immutable once built. The scan consumes them as a slice
/// pre-sorted by the caller in non-increasing departure time.
///
/// # Examples
///
/// ```
/// use profile_server::domain::{Connection, StopId, Time, TripId};
///
/// let c = Connection::new(
///     StopId(0),
///     StopId(1),
///     Time::from_secs(100),
///     Time::from_secs(160),
///     TripId(7),
/// )
/// .unwrap();
/// assert_eq!(c.trip, TripId(7));
///
/// // A hop that arrives before it departs is rejected.
/// assert!(
///     Connection::new(
///         StopId(0),
///         StopId(1),
///         Time::from_secs(100),
///         Time::from_secs(90),
///         TripId(7),
///     )
///     .is_err()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Stop the vehicle departs from.
    pub from: StopId,
    /// Stop the vehicle arrives at.
    pub to: StopId,
    /// Scheduled departure instant.
    pub departure: Time,
    /// Scheduled arrival instant.
    pub arrival: Time,
    /// The vehicle run this hop belongs to.
    pub trip: TripId,
}

impl Connection {
    /// Build a connection, rejecting one that arrives before it departs.
    pub fn new(
        from: StopId,
        to: StopId,
        departure: Time,
        arrival: Time,
        trip: TripId,
    ) -> Result<Self, DomainError> {
        if arrival < departure {
            return Err(DomainError::ArrivalBeforeDeparture {
                from,
                to,
                departure,
                arrival,
            });
        }
        Ok(Self {
            from,
            to,
            departure,
            arrival,
            trip,
        })
    }
}
