//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Load once**: The food catalog is parsed before the listener binds
//! 2. **Cheap cloning**: All fields use Arc or are already Clone-cheap
//! 3. **Immutable after creation**: State is read-only during request handling

use crate::config::AppConfig;
use crate::dataset::FoodCatalog;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
///
/// - `catalog`: Arc'd food table, never mutated after load
/// - `config`: Wrapped in Arc, cloning is O(1)
/// - `metrics`: Prometheus render handle when metrics are enabled
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FoodCatalog>,
    pub config: Arc<AppConfig>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state
    pub fn new(catalog: FoodCatalog, config: AppConfig, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            metrics,
        }
    }

    /// Get a reference to the food catalog
    #[inline]
    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
