use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::adapters::users_mem::InMemoryUserStore;
use crate::repos::users::UserStore;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// User record store (the persistence collaborator)
    pub store: Arc<dyn UserStore>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, security: SecurityConfig) -> Self {
        Self { store, security }
    }

    /// AppState backed by a fresh in-memory user store.
    pub fn in_memory(security: SecurityConfig) -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()), security)
    }
}
