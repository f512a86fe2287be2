//! Recommendation service
//!
//! Composes the pure domain functions for one request:
//! estimate the daily target, classify it, then select foods from the
//! loaded catalog. Request handlers only deal with parsing and shaping.

use crate::dataset::FoodCatalog;
use crate::error::ApiError;
use anyhow::anyhow;
use maternal_diet_shared::{
    calories_per_meal, classify_calories, estimate_daily_calories, plan_meals,
    select_nearest_foods, BiometricInput, CalorieCategory, DietItem, MealPlanItem,
};
use tracing::debug;

/// Nearest-match recommendation for one request
#[derive(Debug, Clone)]
pub struct RecommendationResult {
    /// Unrounded daily target
    pub recommended_calories: f64,
    pub classification: CalorieCategory,
    pub items: Vec<DietItem>,
}

/// Meal plan recommendation for one request
#[derive(Debug, Clone)]
pub struct MealPlanResult {
    pub recommended_calories: f64,
    pub classification: CalorieCategory,
    pub calories_per_meal: f64,
    pub items: Vec<MealPlanItem>,
}

/// Recommendation service
pub struct RecommendationService;

impl RecommendationService {
    /// Top foods whose energy value is nearest the daily target
    pub fn top_diets(
        catalog: &FoodCatalog,
        input: &BiometricInput,
    ) -> Result<RecommendationResult, ApiError> {
        Self::ensure_ready(catalog)?;
        let target = Self::target_calories(input)?;

        let items = select_nearest_foods(target, catalog.records());
        debug!(target_calories = target, selected = items.len(), "Selected nearest foods");

        Ok(RecommendationResult {
            recommended_calories: target,
            classification: classify_calories(target),
            items,
        })
    }

    /// Foods and serving counts that reach the daily target across meals
    pub fn meal_plan(
        catalog: &FoodCatalog,
        input: &BiometricInput,
    ) -> Result<MealPlanResult, ApiError> {
        Self::ensure_ready(catalog)?;
        let target = Self::target_calories(input)?;

        let items = plan_meals(target, catalog.records());
        debug!(target_calories = target, planned = items.len(), "Built meal plan");

        Ok(MealPlanResult {
            recommended_calories: target,
            classification: classify_calories(target),
            calories_per_meal: calories_per_meal(target),
            items,
        })
    }

    /// Round a calorie value for display
    pub fn display_calories(calories: f64) -> i64 {
        calories.round() as i64
    }

    fn ensure_ready(catalog: &FoodCatalog) -> Result<(), ApiError> {
        if catalog.is_ready() {
            Ok(())
        } else {
            Err(ApiError::NotReady("Food dataset is not loaded.".to_string()))
        }
    }

    /// Finite inputs can still overflow; a non-finite target is a server fault
    fn target_calories(input: &BiometricInput) -> Result<f64, ApiError> {
        let target = estimate_daily_calories(input);
        if !target.is_finite() {
            return Err(ApiError::Internal(anyhow!(
                "calorie estimate is not finite for input {:?}",
                input
            )));
        }
        Ok(target)
    }
}
