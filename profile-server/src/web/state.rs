//! Application state for the web layer.

use std::sync::Arc;

use crate::profile::ProfileConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Scan defaults applied when a request omits a parameter.
    pub defaults: Arc<ProfileConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(defaults: ProfileConfig) -> Self {
        Self {
            defaults: Arc::new(defaults),
        }
    }
}
