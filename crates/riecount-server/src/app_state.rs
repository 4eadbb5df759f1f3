//! Shared application state for the counter service.
//!
//! Holds an explicit handle to the counter store. Handlers reach the store only
//! through this state, so independent instances (e.g. per test) never share a
//! lock or a file.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::obs::ServiceMetrics;
use crate::store::{CounterStore, FileCounterStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    store: Arc<dyn CounterStore>,
    metrics: ServiceMetrics,
}

impl AppState {
    /// Build state with a file store at `cfg.store.counter_file`.
    pub fn new(cfg: ServerConfig) -> Self {
        let store = Arc::new(FileCounterStore::new(cfg.store.counter_path()));
        Self::with_store(cfg, store)
    }

    pub fn with_store(cfg: ServerConfig, store: Arc<dyn CounterStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                metrics: ServiceMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> Arc<dyn CounterStore> {
        Arc::clone(&self.inner.store)
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }
}
