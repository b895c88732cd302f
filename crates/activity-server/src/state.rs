//! Application State

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::ActivityStore;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    /// Activity catalog and rosters
    pub store: Arc<RwLock<ActivityStore>>,
}

impl AppState {
    pub fn new(store: ActivityStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
