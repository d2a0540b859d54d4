//! Web layer for the profile scan service.
//!
//! Provides HTTP endpoints for running a profile scan over a network
//! supplied in the request body.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
