//! Prometheus scrape endpoint

use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// GET /metrics - Render the Prometheus text exposition, 404 when disabled
pub async fn render_metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::dataset::FoodCatalog;

    #[tokio::test]
    async fn test_metrics_disabled_is_not_found() {
        let state = AppState::new(FoodCatalog::empty(), AppConfig::default(), None);
        let response = render_metrics(State(state)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
