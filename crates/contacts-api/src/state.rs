//! Application state shared across handlers.

use std::sync::Arc;

use database::ContactStore;

use crate::service::ContactService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Contact operations.
    pub contacts: ContactService,
}

impl AppState {
    /// Create new application state over the given store.
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self {
            contacts: ContactService::new(store),
        }
    }
}
