//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the loaded dataset and the pure domain functions.

pub mod recommendation;

pub use recommendation::{MealPlanResult, RecommendationResult, RecommendationService};
