use std::sync::Arc;

use crate::{db::MemoryStore, services::MovieProvider};

/// Shared application state
///
/// Built once at startup and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub provider: Arc<dyn MovieProvider>,
}

impl AppState {
    /// Creates state with an empty store backed by `provider`
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), provider)
    }

    pub fn with_store(store: Arc<MemoryStore>, provider: Arc<dyn MovieProvider>) -> Self {
        Self { store, provider }
    }
}
