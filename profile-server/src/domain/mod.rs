//! Domain types for the profile scan.
//!
//! This module contains the core model types that represent validated
//! transit data. Types enforce their invariants at construction time, so
//! code that receives them can trust their validity.

mod connection;
mod error;
mod stop;
mod time;
mod trip;

pub use connection::Connection;
pub use error::DomainError;
pub use stop::StopId;
pub use time::{Arrival, Time};
pub use trip::TripId;
