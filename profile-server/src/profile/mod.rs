//! Profile connection scan.
//!
//! This module implements the backward profile scan that answers: "for a
//! fixed target stop, what are the Pareto-optimal (departure, arrival)
//! pairs from every other stop?"
//!
//! The engine makes a single pass over connections ordered by non-increasing
//! departure time, maintaining a Pareto frontier per stop and a best-arrival
//! entry per trip, and propagating frontier improvements across the footpath
//! graph.

mod config;
mod frontier;
mod scan;
mod trips;

#[cfg(test)]
mod scan_tests;

pub use config::ProfileConfig;
pub use frontier::{ParetoFrontier, ParetoTuple, StopProfile};
pub use scan::{ProfileScan, ScanError, TimeWindow};
pub use trips::TripArrivals;
