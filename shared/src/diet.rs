//! Diet selection over the in-memory food table
//!
//! Two explicitly separate response shapes are offered:
//! - [`select_nearest_foods`]: the ten foods whose per-serving energy is
//!   closest to the daily target
//! - [`plan_meals`]: foods ranked against a per-meal share of the target,
//!   each annotated with a serving count that reaches the daily target
//!
//! Both are deterministic. Candidates with `calories <= 0` are never
//! eligible, descriptions are deduplicated keeping the first occurrence in
//! table order, and ties in distance keep that same order (stable sort).

use crate::health_metrics::{classify_calories, CalorieCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of items either selection returns
pub const MAX_RESULTS: usize = 10;

/// Meals the daily target is split across when planning
pub const MEALS_PER_DAY: u32 = 4;

/// Serving count bounds for a meal plan item
pub const MIN_SERVINGS: u32 = 3;
pub const MAX_SERVINGS: u32 = 5;

/// Meal plan items matching less of the target than this are dropped
pub const MIN_MATCH_PERCENT: f64 = 90.0;

/// One row of the nutrition table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub description: String,
    /// Kilocalories per reference serving
    pub calories: f64,
}

impl FoodRecord {
    pub fn new(description: impl Into<String>, calories: f64) -> Self {
        Self {
            description: description.into(),
            calories,
        }
    }
}

/// A food returned by [`select_nearest_foods`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietItem {
    pub description: String,
    /// Original table value, never the ranking distance
    pub calories: f64,
    pub calorie_category: CalorieCategory,
}

impl From<&FoodRecord> for DietItem {
    fn from(record: &FoodRecord) -> Self {
        Self {
            description: record.description.clone(),
            calories: record.calories,
            calorie_category: classify_calories(record.calories),
        }
    }
}

/// A food returned by [`plan_meals`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanItem {
    pub description: String,
    pub calories: f64,
    pub calorie_category: CalorieCategory,
    /// Servings per day, within `MIN_SERVINGS..=MAX_SERVINGS`
    pub servings: u32,
    /// `servings * calories`
    pub total_calories: f64,
    /// `total_calories` as a percentage of the daily target, one decimal
    pub percent_of_target: f64,
}

/// Eligible records (positive energy, first occurrence of each description)
/// sorted by distance to `reference`
fn rank_by_distance(dataset: &[FoodRecord], reference: f64) -> Vec<&FoodRecord> {
    let mut seen = HashSet::new();
    let mut ranked: Vec<(f64, &FoodRecord)> = dataset
        .iter()
        .filter(|record| record.calories > 0.0)
        .filter(|record| seen.insert(record.description.as_str()))
        .map(|record| ((record.calories - reference).abs(), record))
        .collect();

    // sort_by is stable; equal distances keep table order
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranked.into_iter().map(|(_, record)| record).collect()
}

/// Top foods by closeness of their energy value to `target_calories`
pub fn select_nearest_foods(target_calories: f64, dataset: &[FoodRecord]) -> Vec<DietItem> {
    rank_by_distance(dataset, target_calories)
        .into_iter()
        .take(MAX_RESULTS)
        .map(DietItem::from)
        .collect()
}

/// Servings of a food needed to approach the daily target, clamped to
/// `MIN_SERVINGS..=MAX_SERVINGS`
pub fn recommended_servings(target_calories: f64, calories_per_serving: f64) -> u32 {
    let raw = (target_calories / calories_per_serving).round();
    raw.clamp(MIN_SERVINGS as f64, MAX_SERVINGS as f64) as u32
}

/// How closely `total` reaches `target`, where 100 is an exact hit and
/// overshooting is penalised the same as falling short
pub fn match_percent(total: f64, target: f64) -> f64 {
    100.0 - (total - target).abs() / target * 100.0
}

/// Daily target divided evenly across meals
pub fn calories_per_meal(target_calories: f64) -> f64 {
    target_calories / MEALS_PER_DAY as f64
}

/// Meal-planning selection
///
/// Ranks foods against the per-meal share of the target, assigns each a
/// serving count, and keeps the first [`MAX_RESULTS`] whose daily total is
/// within [`MIN_MATCH_PERCENT`] of the target. A non-positive or non-finite
/// target has no meaningful plan and yields an empty list.
pub fn plan_meals(target_calories: f64, dataset: &[FoodRecord]) -> Vec<MealPlanItem> {
    if !target_calories.is_finite() || target_calories <= 0.0 {
        return Vec::new();
    }

    let per_meal = calories_per_meal(target_calories);

    rank_by_distance(dataset, per_meal)
        .into_iter()
        .filter_map(|record| {
            let servings = recommended_servings(target_calories, record.calories);
            let total = servings as f64 * record.calories;
            if match_percent(total, target_calories) < MIN_MATCH_PERCENT {
                return None;
            }
            Some(MealPlanItem {
                description: record.description.clone(),
                calories: record.calories,
                calorie_category: classify_calories(record.calories),
                servings,
                total_calories: total,
                percent_of_target: round_to_tenth(total / target_calories * 100.0),
            })
        })
        .take(MAX_RESULTS)
        .collect()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
