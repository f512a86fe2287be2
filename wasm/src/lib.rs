//! Maternal Diet Planner WASM Module
//!
//! This crate exposes the calorie estimator and classifier to the browser
//! so a client can preview a target before calling the API.

use maternal_diet_shared::health_metrics::{
    classify_calories, estimate_daily_calories, ActivityLevel, BiometricInput, PregnancyStage,
};
use wasm_bindgen::prelude::*;

/// Estimate the daily calorie target
///
/// Returns `undefined` when `preg_stage` or `active` is not an accepted label.
#[wasm_bindgen]
pub fn estimate_calories(
    age: f64,
    height_m: f64,
    weight_kg: f64,
    preg_stage: &str,
    active: &str,
) -> Option<f64> {
    let input = BiometricInput {
        age,
        height_m,
        weight_kg,
        pregnancy_stage: preg_stage.parse::<PregnancyStage>().ok()?,
        activity_level: active.parse::<ActivityLevel>().ok()?,
    };
    Some(estimate_daily_calories(&input))
}

/// Classify a calorie value as "low", "mid" or "high"
#[wasm_bindgen]
pub fn calorie_category(calories: f64) -> String {
    classify_calories(calories).as_str().to_string()
}
