//! API request and response types
//!
//! Field names are a contract with existing callers and must not change.

use crate::diet::{DietItem, MealPlanItem};
use crate::health_metrics::CalorieCategory;
use serde::{Deserialize, Serialize};

/// Raw query string for the recommendation endpoints
///
/// Every field is optional here so that absence can be reported as a
/// validation error rather than an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DietQuery {
    pub age: Option<String>,
    /// Height in meters
    pub height: Option<String>,
    /// Weight in kilograms
    pub weight: Option<String>,
    pub preg_stage: Option<String>,
    pub active: Option<String>,
}

/// Response for `GET /api/top_10_diets`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDietsResponse {
    /// Daily target rounded to the nearest kcal
    pub recommended_calories: i64,
    /// Band of the unrounded target
    pub caloric_classification: CalorieCategory,
    pub top_10_diets: Vec<DietItem>,
}

/// Response for `GET /api/meal_plan`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanResponse {
    pub recommended_calories: i64,
    pub caloric_classification: CalorieCategory,
    pub calories_per_meal: i64,
    pub meals_per_day: u32,
    pub meal_plan: Vec<MealPlanItem>,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
