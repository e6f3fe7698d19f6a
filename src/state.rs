//! Shared application state
//!
//! Passed through the axum router; clones share the same store.

use std::sync::Arc;

use crate::config::EnvironmentConfig;
use crate::store::RentalStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RentalStore>,
    pub config: Arc<EnvironmentConfig>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            store: Arc::new(RentalStore::new()),
            config: Arc::new(config),
        }
    }
}
