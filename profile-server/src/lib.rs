//! Profile connection scan server.
//!
//! Answers: "from every stop in this network, what are the Pareto-optimal
//! (departure, arrival) pairs for reaching one fixed target stop?"

pub mod domain;
pub mod profile;
pub mod walk;
pub mod web;
