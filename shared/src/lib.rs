//! Maternal Diet Planner Shared Library
//!
//! Pure domain logic shared by the backend and WASM modules: the calorie
//! estimator, the calorie classifier, the diet selectors and the API types.

pub mod diet;
pub mod errors;
pub mod health_metrics;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use diet::*;
pub use errors::*;
pub use health_metrics::*;
pub use types::*;
pub use validation::parse_biometric_query;
