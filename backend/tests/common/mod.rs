//! Common test utilities for integration tests
//!
//! Builds the full router over an in-memory fixture catalog.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use maternal_diet_backend::{config::AppConfig, dataset::FoodCatalog, routes, state::AppState};
use tower::ServiceExt;

/// Fixture table in the same shape as the production CSV
pub const FIXTURE_CSV: &str = "\
NDB_No,Shrt_Desc,Energ_Kcal
1,\"JOLLOF RICE,COOKED\",174
2,POUNDED YAM,118
3,EGUSI SOUP,290
4,AKARA,270
5,MOI MOI,180
6,\"PLANTAIN,RIPE,FRIED\",332
7,PUFF PUFF,364
8,CHIN CHIN,488
9,OKRA SOUP,85
10,WATER,0
11,SUYA,245
12,BANGA SOUP,310
13,\"JOLLOF RICE,COOKED\",2014
14,GROUNDNUTS,585
15,ABACHA,520
16,BROKEN ROW,n/a
";

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a test application over the fixture table
    pub fn new() -> Self {
        let catalog =
            FoodCatalog::from_reader(FIXTURE_CSV.as_bytes(), "Shrt_Desc", "Energ_Kcal")
                .expect("fixture CSV should parse");
        Self::with_catalog(catalog)
    }

    /// Create a test application over a specific catalog
    pub fn with_catalog(catalog: FoodCatalog) -> Self {
        let state = AppState::new(catalog, AppConfig::default(), None);
        let app = routes::create_router(state);
        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a GET request and parse the JSON body
    pub async fn get_json(&self, path: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.get(path).await;
        let json = serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("body is not JSON ({}): {}", e, body));
        (status, json)
    }
}
