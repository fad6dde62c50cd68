//! Shared state for the attendance API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::AttendanceStore;

/// State handed to every request handler.
///
/// Holds the loaded rule configuration and the backend behind the
/// persistence ports. Both are reference counted, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<dyn AttendanceStore>,
}

impl AppState {
    /// Creates the state from a configuration and a store.
    pub fn new<S>(config: ConfigLoader, store: S) -> Self
    where
        S: AttendanceStore + 'static,
    {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Creates the state around an already shared store.
    pub fn with_shared_store(config: ConfigLoader, store: Arc<dyn AttendanceStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Returns a shared handle to the configuration loader.
    pub fn shared_config(&self) -> Arc<ConfigLoader> {
        Arc::clone(&self.config)
    }

    /// Returns a shared handle to the store.
    pub fn store(&self) -> Arc<dyn AttendanceStore> {
        Arc::clone(&self.store)
    }
}
