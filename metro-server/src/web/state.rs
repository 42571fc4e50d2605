//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;

/// Shared application state.
///
/// The network is read-only, so handlers share it without locking and each
/// request runs its own route search.
#[derive(Clone)]
pub struct AppState {
    /// Station graph and map layout
    pub network: Arc<Network>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
