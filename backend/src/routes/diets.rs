//! Diet recommendation API routes

use crate::error::{ApiError, ApiResult};
use crate::services::RecommendationService;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use maternal_diet_shared::{
    parse_biometric_query, BiometricInput, DietQuery, MealPlanResponse, TopDietsResponse,
    MEALS_PER_DAY,
};

/// Create diet recommendation routes
pub fn diet_routes() -> Router<AppState> {
    Router::new()
        .route("/top_10_diets", get(top_10_diets))
        .route("/meal_plan", get(meal_plan))
}

/// Validate the raw query, turning extractor failures into the JSON error shape
fn biometric_input(query: Result<Query<DietQuery>, QueryRejection>) -> ApiResult<BiometricInput> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    Ok(parse_biometric_query(&query)?)
}

/// GET /api/top_10_diets - Foods nearest the daily calorie target
async fn top_10_diets(
    State(state): State<AppState>,
    query: Result<Query<DietQuery>, QueryRejection>,
) -> ApiResult<Json<TopDietsResponse>> {
    let input = biometric_input(query)?;
    let result = RecommendationService::top_diets(state.catalog(), &input)?;

    metrics::counter!("diet_recommendations_total", "endpoint" => "top_10_diets").increment(1);
    metrics::histogram!("diet_recommended_calories").record(result.recommended_calories);

    Ok(Json(TopDietsResponse {
        recommended_calories: RecommendationService::display_calories(result.recommended_calories),
        caloric_classification: result.classification,
        top_10_diets: result.items,
    }))
}

/// GET /api/meal_plan - Foods with serving counts that reach the daily target
async fn meal_plan(
    State(state): State<AppState>,
    query: Result<Query<DietQuery>, QueryRejection>,
) -> ApiResult<Json<MealPlanResponse>> {
    let input = biometric_input(query)?;
    let result = RecommendationService::meal_plan(state.catalog(), &input)?;

    metrics::counter!("diet_recommendations_total", "endpoint" => "meal_plan").increment(1);
    metrics::histogram!("diet_recommended_calories").record(result.recommended_calories);

    Ok(Json(MealPlanResponse {
        recommended_calories: RecommendationService::display_calories(result.recommended_calories),
        caloric_classification: result.classification,
        calories_per_meal: RecommendationService::display_calories(result.calories_per_meal),
        meals_per_day: MEALS_PER_DAY,
        meal_plan: result.items,
    }))
}
