//! Instants and the unreachable sentinel.
//!
//! Timetable feeds supply instants as whole seconds since the Unix epoch.
//! This module wraps that representation and provides arithmetic with
//! `chrono::Duration`, plus the `Arrival` sentinel the scan uses to say
//! "no achievable arrival".

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use chrono::{DateTime, Duration};
use serde::{Deserialize, Serialize};

/// An instant, in whole seconds since the Unix epoch.
///
/// # Examples
///
/// ```
/// use profile_server::domain::Time;
/// use chrono::Duration;
///
/// let t = Time::from_secs(3600);
/// assert_eq!((t + Duration::minutes(5)).secs(), 3900);
/// assert!(t < Time::from_secs(3601));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(i64);

impl Time {
    /// Create a time from epoch seconds.
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Returns the epoch seconds.
    pub const fn secs(self) -> i64 {
        self.0
    }

    /// Convert to a UTC datetime, if representable.
    pub fn to_datetime(self) -> Option<DateTime<chrono::Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }

    /// Create from a UTC datetime, truncating sub-second precision.
    pub fn from_datetime(dt: DateTime<chrono::Utc>) -> Self {
        Self(dt.timestamp())
    }

    /// The elapsed duration from `other` to `self`.
    ///
    /// Negative when `other` is after `self`.
    pub fn signed_duration_since(self, other: Self) -> Duration {
        Duration::seconds(self.0 - other.0)
    }
}

impl Add<Duration> for Time {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs.num_seconds())
    }
}

impl Sub<Duration> for Time {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        Self(self.0 - rhs.num_seconds())
    }
}

impl fmt::Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time({})", self.0)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The best arrival at the target, or "cannot get there".
///
/// `Unreachable` compares strictly greater than every finite arrival, so
/// `min` and the dominance checks treat it as positive infinity without a
/// magic in-band value.
///
/// # Examples
///
/// ```
/// use profile_server::domain::{Arrival, Time};
///
/// let finite = Arrival::At(Time::from_secs(100));
/// assert!(finite < Arrival::Unreachable);
/// assert_eq!(finite.min(Arrival::Unreachable), finite);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Arrival {
    /// Arriving at the given instant.
    At(Time),
    /// No achievable arrival.
    Unreachable,
}

impl Arrival {
    /// True if this is the unreachable sentinel.
    pub fn is_unreachable(self) -> bool {
        matches!(self, Arrival::Unreachable)
    }

    /// The finite arrival time, if any.
    pub fn time(self) -> Option<Time> {
        match self {
            Arrival::At(t) => Some(t),
            Arrival::Unreachable => None,
        }
    }
}

impl Ord for Arrival {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Arrival::At(a), Arrival::At(b)) => a.cmp(b),
            (Arrival::At(_), Arrival::Unreachable) => Ordering::Less,
            (Arrival::Unreachable, Arrival::At(_)) => Ordering::Greater,
            (Arrival::Unreachable, Arrival::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Arrival {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Arrival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arrival::At(t) => write!(f, "{t}"),
            Arrival::Unreachable => f.write_str("unreachable"),
        }
    }
}

impl From<Time> for Arrival {
    fn from(t: Time) -> Self {
        Arrival::At(t)
    }
}
